mod devices;
mod form;
mod headless;
mod keys;
mod runner;
mod view;

#[cfg(test)]
mod tests;

pub(crate) use devices::run_devices;
pub(crate) use form::FilterForm;
pub(crate) use headless::run_headless;
pub(crate) use runner::{InteractiveOptions, run_interactive};
