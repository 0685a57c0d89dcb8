use clap::Parser;
use log::error;

use deskscene::app;
use deskscene::config::{Args, Config};
use deskscene::{logger, Error, Scene};

fn main() -> Result<(), Error> {
    let config = Config::desk().with_args(Args::parse());
    logger::init()?;

    let result = Scene::desk(&config).and_then(|scene| app::run(&config, scene, true));
    if let Err(e) = &result {
        error!("{e}");
    }
    result
}
