use std::{env, process};

use gen_png::{
    encode,
    opts::{self, SizeFlag},
    raster::Shape,
    scene::{Paint, Scene, WHITE},
};

const NUM_SQUARES: usize = 5;

const COLORS: [u32; NUM_SQUARES] = [0x0408ff, 0x24057c, 0x6478ff, 0xcc2200, 0xfd2ce0];

/// 最大辺をどれだけ縮めるかの比率. 末尾の 1.0 が `--side_length` そのままの正方形になる.
const FACTORS: [f64; NUM_SQUARES] = [3.0, 2.5, 2.0, 1.5, 1.0];

const NUM_ROWS: usize = 4;

fn main() {
    let opts = match opts::parse(env::args().skip(1), SizeFlag::SideLength, "square.png") {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            eprint!("{}", opts::usage("squares", SizeFlag::SideLength));
            process::exit(1);
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if opts.verbose { "debug" } else { "info" }),
    )
    .init();

    log::debug!("there will be {} points on the x-axis", opts.width);
    log::debug!("there will be {} points on the y-axis", opts.height);
    log::debug!(
        "each side of the main square will have {} pixels",
        opts.size as u32
    );
    log::debug!("there will be {} squares per row", NUM_SQUARES);
    log::debug!(
        "the colors will be {}",
        COLORS
            .iter()
            .map(|color| format!("{:06x}", color))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let scene = Scene {
        width: opts.width as u32,
        height: opts.height as u32,
        paint: Paint::Packed {
            background: WHITE,
            shapes: layout(opts.size),
        },
    };

    println!("Generating data for Square...");
    let rgb = scene.rasterize();

    println!("Saving PNG to {}...", opts.outfile);
    if let Err(e) = encode::write_png(&opts.outfile, scene.width, scene.height, &rgb, Some("Square"))
    {
        eprintln!("ERROR: {:#}", e);
        process::exit(1);
    }
    println!("DONE.");
}

/// 1 行あたり 5 つの正方形を大きい順に左から並べ, それを 4 行積む.
fn layout(side_length: f64) -> Vec<(Shape, u32)> {
    let margin = 0.10 * side_length;

    let side_lengths: Vec<f64> = FACTORS
        .iter()
        .map(|factor| side_length / factor)
        .collect();

    // each square starts one margin after the previous one ends
    let mut x0s = vec![margin];
    for index in 1..NUM_SQUARES {
        x0s.push(x0s[index - 1] + side_lengths[index - 1] + margin);
    }

    let mut shapes = Vec::with_capacity(NUM_ROWS * NUM_SQUARES);
    for row in 0..NUM_ROWS {
        let y0 = (row as f64 + 1.0) * margin + row as f64 * side_length;
        for index in 0..NUM_SQUARES {
            shapes.push((
                Shape::Square {
                    x0: x0s[index],
                    y0,
                    side_length: side_lengths[index],
                },
                COLORS[index],
            ));
        }
    }
    shapes
}
