use std::{env, process};

use gen_png::{
    encode,
    opts::{self, SizeFlag},
    raster::Shape,
    scene::{Paint, Scene, OTHER_COLOR},
};

const NUM_RINGS: usize = 8;

fn main() {
    let opts = match opts::parse(env::args().skip(1), SizeFlag::Radius, "rings.png") {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            eprint!("{}", opts::usage("rings", SizeFlag::Radius));
            process::exit(1);
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if opts.verbose { "debug" } else { "info" }),
    )
    .init();

    let width = opts.width as u32;
    let height = opts.height as u32;
    let x0 = (width / 2) as f64;
    let y0 = (height / 2) as f64;

    log::debug!("there will be {} points on the x-axis", opts.width);
    log::debug!("there will be {} points on the y-axis", opts.height);
    log::debug!(
        "{} rings centered at ({}, {}) down from radius {}",
        NUM_RINGS,
        x0,
        y0,
        opts.size
    );

    let scene = Scene {
        width,
        height,
        paint: Paint::Ramped {
            background: OTHER_COLOR,
            shapes: rings(x0, y0, opts.size),
        },
    };

    println!("Generating data for Circle...");
    let rgb = scene.rasterize();

    println!("Saving PNG to {}...", opts.outfile);
    if let Err(e) = encode::write_png(&opts.outfile, width, height, &rgb, Some("Circle")) {
        eprintln!("ERROR: {:#}", e);
        process::exit(1);
    }
    println!("DONE.");
}

/// 外側から内側へ半径とランプ値を等分に刻んだ同心円を作る.
/// 後から描く円ほど内側なので, 重なりの残りが同心の輪になる.
fn rings(x0: f64, y0: f64, radius: f64) -> Vec<(Shape, f64)> {
    (0..NUM_RINGS)
        .map(|index| {
            let step = (NUM_RINGS - index) as f64;
            (
                Shape::Circle {
                    x0,
                    y0,
                    radius: radius * step / NUM_RINGS as f64,
                },
                step / (NUM_RINGS + 1) as f64,
            )
        })
        .collect()
}
