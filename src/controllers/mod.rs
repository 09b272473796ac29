pub mod capsule_controller;
pub mod client_controller;
pub mod mechanic_controller;
pub mod repair_controller;
pub mod vehicle_controller;
