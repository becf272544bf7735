use clap::Parser;
use log::info;
use nalgebra::Matrix4;

use scan_math::Scalar;
use scan_math::io::cli::{CliAction, SimpleCli};

fn print_matrix(title: &str, m: &Matrix4<Scalar>) {
    println!("{}:", title);
    for row in m.row_iter() {
        println!(
            "  [{:>12.6}, {:>12.6}, {:>12.6}, {:>12.6}]",
            row[0], row[1], row[2], row[3]
        );
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match SimpleCli::parse().process()? {
        CliAction::ExampleWritten(path) => {
            println!("示例配置已写入 {}", path);
            return Ok(());
        }
        CliAction::Compute(settings) => settings,
    };

    info!(
        "旋转: 轴 ({}) 角度 {}°；投影: fov {}° 宽高比 {:.4} near {} far {}",
        settings.rotation_axis,
        settings.rotation_angle,
        settings.fov,
        settings.aspect(),
        settings.near,
        settings.far
    );

    let rotation = settings.rotation_matrix()?;
    let projection = settings.projection_matrix();

    print_matrix("Rotation", &rotation);
    print_matrix("Projection", &projection);
    print_matrix("Projection x Rotation", &(projection * rotation));
    Ok(())
}
