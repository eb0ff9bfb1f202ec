pub(crate) mod keys;

mod aggregate;
mod disruptions;
mod ports;
mod tariffs;
mod vessels;
