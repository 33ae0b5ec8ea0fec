pub mod speed;

pub use speed::SpeedAdjuster;
