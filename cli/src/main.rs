//! bmpfx: apply one filter to an uncompressed BMP.
//!
//! Decode → filter → encode, non-interactively. Parameter ranges are checked
//! by the library, so bad values surface as errors rather than prompts.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use bmpfx::{Filter, FilterParams};

/// Apply a filter to a 24-bit BMP image.
#[derive(Parser, Debug)]
#[command(name = "bmpfx", version, about)]
struct Args {
    /// Source BMP file.
    input: PathBuf,

    /// Destination BMP file (created or overwritten).
    output: PathBuf,

    /// Filter to apply.
    #[arg(value_enum)]
    filter: FilterArg,

    // --- Parameters ---
    /// Scale factor in [0, 1] for clarendon, lighten and darken.
    #[arg(short, long)]
    scale: Option<f64>,

    /// Number of clockwise quarter turns for `rotate`.
    #[arg(long, conflicts_with = "degrees")]
    turns: Option<i64>,

    /// Clockwise rotation in degrees for `rotate` (multiple of 90).
    #[arg(long)]
    degrees: Option<i64>,

    /// Horizontal factor for `enlarge`.
    #[arg(short = 'x', long)]
    x_scale: Option<i64>,

    /// Vertical factor for `enlarge`.
    #[arg(short = 'y', long)]
    y_scale: Option<i64>,
}

/// Filter selection, in menu order.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterArg {
    Vignette,
    Clarendon,
    Grayscale,
    #[value(name = "rotate-90")]
    Rotate90,
    Rotate,
    Enlarge,
    HighContrast,
    Lighten,
    Darken,
    Palette,
}

impl FilterArg {
    fn menu_code(self) -> u8 {
        match self {
            FilterArg::Vignette => 1,
            FilterArg::Clarendon => 2,
            FilterArg::Grayscale => 3,
            FilterArg::Rotate90 => 4,
            FilterArg::Rotate => 5,
            FilterArg::Enlarge => 6,
            FilterArg::HighContrast => 7,
            FilterArg::Lighten => 8,
            FilterArg::Darken => 9,
            FilterArg::Palette => 10,
        }
    }
}

impl Args {
    fn params(&self) -> FilterParams {
        FilterParams {
            scale: self.scale,
            turns: self.turns,
            x_scale: self.x_scale,
            y_scale: self.y_scale,
        }
    }
}

/// Decode, filter and encode. I/O errors already name their path.
fn run(args: &Args) -> anyhow::Result<()> {
    let grid = bmpfx::decode_file(&args.input)?;

    let out = match (args.filter, args.degrees) {
        (FilterArg::Rotate, Some(degrees)) => bmpfx::filter::rotate_degrees(&grid, degrees)?,
        (_, Some(_)) => anyhow::bail!("--degrees only applies to `rotate`"),
        (arg, None) => {
            let filter = Filter::from_menu_code(arg.menu_code(), &args.params())?;
            filter.apply(&grid)?
        }
    };

    bmpfx::encode_file(&args.output, &out)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    run(&args)?;
    println!("Saved {}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_codes_match_library() {
        let params = FilterParams {
            scale: Some(0.5),
            turns: Some(1),
            x_scale: Some(1),
            y_scale: Some(1),
        };
        for arg in FilterArg::value_variants() {
            let f = Filter::from_menu_code(arg.menu_code(), &params).unwrap();
            assert_eq!(f.menu_code(), arg.menu_code());
        }
    }

    fn args(input: PathBuf, output: PathBuf, filter: FilterArg) -> Args {
        Args {
            input,
            output,
            filter,
            scale: None,
            turns: None,
            degrees: None,
            x_scale: None,
            y_scale: None,
        }
    }

    #[test]
    fn missing_input_names_path_once() {
        let dir = tempfile::tempdir().unwrap();
        let a = args(
            dir.path().join("missing.bmp"),
            dir.path().join("out.bmp"),
            FilterArg::Grayscale,
        );
        let msg = format!("{:#}", run(&a).unwrap_err());
        assert_eq!(msg.matches("missing.bmp").count(), 1, "{msg}");
    }

    #[test]
    fn unwritable_output_names_path_once() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bmp");
        let grid = bmpfx::Grid::filled(2, 2, bmpfx::WHITE).unwrap();
        bmpfx::encode_file(&input, &grid).unwrap();
        let a = args(
            input,
            dir.path().join("absent").join("out.bmp"),
            FilterArg::Palette,
        );
        let msg = format!("{:#}", run(&a).unwrap_err());
        assert_eq!(msg.matches("out.bmp").count(), 1, "{msg}");
    }

    #[test]
    fn run_writes_filtered_image() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bmp");
        let output = dir.path().join("out.bmp");
        let grid = bmpfx::Grid::filled(3, 2, bmpfx::Pixel::new(90, 0, 0)).unwrap();
        bmpfx::encode_file(&input, &grid).unwrap();

        run(&args(input, output.clone(), FilterArg::Rotate90)).unwrap();
        let out = bmpfx::decode_file(&output).unwrap();
        assert_eq!((out.width(), out.height()), (2, 3));
    }

    #[test]
    fn parses_enlarge_args() {
        let args = Args::try_parse_from([
            "bmpfx", "in.bmp", "out.bmp", "enlarge", "-x", "2", "-y", "3",
        ])
        .unwrap();
        assert!(matches!(args.filter, FilterArg::Enlarge));
        assert_eq!(args.params().x_scale, Some(2));
        assert_eq!(args.params().y_scale, Some(3));
    }

    #[test]
    fn turns_and_degrees_conflict() {
        let res = Args::try_parse_from([
            "bmpfx", "in.bmp", "out.bmp", "rotate", "--turns", "1", "--degrees", "90",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn rotate_90_value_name() {
        let args = Args::try_parse_from(["bmpfx", "a.bmp", "b.bmp", "rotate-90"]).unwrap();
        assert!(matches!(args.filter, FilterArg::Rotate90));
        let args = Args::try_parse_from(["bmpfx", "a.bmp", "b.bmp", "high-contrast"]).unwrap();
        assert!(matches!(args.filter, FilterArg::HighContrast));
    }
}
