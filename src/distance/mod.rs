pub mod calculator;
pub mod central_angle;
