pub mod disruptions;
pub mod ports;
pub mod tariffs;
pub mod vessels;
