use anyhow::{Context, Result};
use cellscan_core::capture::camera::list_cameras;

pub fn run() -> Result<()> {
    let cameras = list_cameras().context("Failed to query capture devices")?;

    if cameras.is_empty() {
        println!("No capture devices found.");
        return Ok(());
    }

    println!("{:<8} {:<32} Description", "Index", "Name");
    println!("{}", "-".repeat(72));
    for cam in cameras {
        println!("{:<8} {:<32} {}", cam.index, cam.name, cam.description);
    }

    Ok(())
}
