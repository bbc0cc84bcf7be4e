pub mod run;
pub mod util;
