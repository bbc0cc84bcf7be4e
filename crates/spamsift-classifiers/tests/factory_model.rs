//! Integration tests for the classifier factory and the three backends.

use ndarray::Array2;
use spamsift_classifiers::config::ModelType;
use spamsift_classifiers::error::ClassifierError;
use spamsift_classifiers::models::{build_model, HAM, SPAM};

fn toy_data() -> (Array2<f64>, Vec<bool>) {
    // Columns: "cash", "prize", "meeting", "report"
    let x = Array2::from_shape_vec(
        (8, 4),
        vec![
            0.8, 0.6, 0.0, 0.0, // spam
            0.0, 0.0, 0.7, 0.7, // ham
            0.9, 0.4, 0.0, 0.1, // spam
            0.0, 0.1, 0.6, 0.8, // ham
            0.7, 0.7, 0.0, 0.0, // spam
            0.1, 0.0, 0.9, 0.4, // ham
            0.6, 0.8, 0.1, 0.0, // spam
            0.0, 0.0, 0.5, 0.9, // ham
        ],
    )
    .expect("failed to create feature matrix");
    let y = vec![true, false, true, false, true, false, true, false];
    (x, y)
}

#[test]
fn factory_builds_and_predicts_every_model() {
    let (x, y) = toy_data();
    for model_type in ModelType::all() {
        let mut model = build_model(&model_type);
        assert_eq!(model.name(), model_type.name());

        model.fit(&x, &y).unwrap();
        let proba = model.predict_proba(&x).unwrap();
        assert_eq!(proba.shape(), &[x.nrows(), 2]);

        let predictions = model.predict(&x).unwrap();
        assert_eq!(predictions, y, "{} failed on separable data", model.name());

        for (row, &is_spam) in proba.rows().into_iter().zip(&predictions) {
            assert!((row[HAM] + row[SPAM] - 1.0).abs() < 1e-6);
            assert_eq!(is_spam, row[SPAM] > row[HAM]);
        }
    }
}

#[test]
fn single_class_training_is_rejected() {
    let (x, _) = toy_data();
    let all_spam = vec![true; x.nrows()];
    for model_type in ModelType::all() {
        let mut model = build_model(&model_type);
        let err = model.fit(&x, &all_spam).unwrap_err();
        assert!(
            matches!(err, ClassifierError::InvalidTrainingData(_)),
            "{}: {:?}",
            model_type,
            err
        );
    }
}

#[test]
fn empty_training_set_is_rejected() {
    let x = Array2::<f64>::zeros((0, 4));
    for model_type in ModelType::all() {
        let mut model = build_model(&model_type);
        assert!(matches!(
            model.fit(&x, &[]),
            Err(ClassifierError::InvalidTrainingData(_))
        ));
    }
}

#[test]
fn unfitted_model_refuses_to_predict() {
    let (x, _) = toy_data();
    for model_type in ModelType::all() {
        let model = build_model(&model_type);
        assert!(matches!(
            model.predict(&x),
            Err(ClassifierError::NotFitted(_))
        ));
    }
}

#[test]
fn fitting_twice_with_fixed_seed_is_deterministic() {
    let (x, y) = toy_data();
    for model_type in ModelType::all() {
        let mut first = build_model(&model_type);
        let mut second = build_model(&model_type);
        first.fit(&x, &y).unwrap();
        second.fit(&x, &y).unwrap();
        assert_eq!(
            first.predict_proba(&x).unwrap(),
            second.predict_proba(&x).unwrap(),
            "{} is not deterministic",
            model_type
        );
    }
}
