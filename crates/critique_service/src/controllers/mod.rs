pub mod analyze_controller;
pub mod health_controller;
