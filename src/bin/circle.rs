use std::{env, process};

use gen_png::{
    encode,
    opts::{self, SizeFlag},
    raster::Shape,
    scene::{Paint, Scene, WHITE},
};

fn main() {
    let opts = match opts::parse(env::args().skip(1), SizeFlag::Radius, "circle.png") {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            eprint!("{}", opts::usage("circle", SizeFlag::Radius));
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
    let radius = opts.size;

    log::debug!("there will be {} points on the x-axis", opts.width);
    log::debug!("there will be {} points on the y-axis", opts.height);
    log::debug!("the ring is centered at ({}, {}) with radius {}", x0, y0, radius);
    log::debug!("the ring color will be {:06x}", opts.color);

    // the inner circle in background white leaves only an annulus of the color
    let shapes = vec![
        (Shape::Circle { x0, y0, radius }, opts.color),
        (
            Shape::Circle {
                x0,
                y0,
                radius: radius * 2.0 / 3.0,
            },
            WHITE,
        ),
    ];

    let scene = Scene {
        width,
        height,
        paint: Paint::Packed {
            background: WHITE,
            shapes,
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
