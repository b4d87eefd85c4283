// Based on the conway example from the pixels crate
//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

use pixel_life::projects::life::run_life;
use pixel_life::{Error, LifeConfig};

fn main() -> Result<(), Error> {
    env_logger::init();
    println!("\nControls:\nP: pause\nSPACE: frame by frame\nC: clear\nR: randomize\nS: reseed\n1-4: seed pattern\nESC: close screen");
    run_life(LifeConfig::DEFAULT)
}
