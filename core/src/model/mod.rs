pub mod event;
pub mod grade;
pub mod period;
pub mod scale;
pub mod subject;
