use clap::Parser;
use log::error;

use deskscene::app;
use deskscene::config::{Args, Config};
use deskscene::{logger, Error, Scene};

fn main() -> Result<(), Error> {
    let config = Config::milestone().with_args(Args::parse());
    logger::init()?;

    // The cursor stays free; the camera turns only while the right button is held.
    let result = Scene::milestone(&config).and_then(|scene| app::run(&config, scene, false));
    if let Err(e) = &result {
        error!("{e}");
    }
    result
}
