use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fillet_engine::coords::Rect;
use fillet_engine::logging::{init_logging, LoggingConfig};
use fillet_engine::paint::Color;
use fillet_engine::raster::{RasterConfig, Rasterizer, Texture};
use fillet_engine::ui::{Graphic, RoundedCorners, Sprite, DEFAULT_RADIUS};

/// Renders a rounded-corner image to a PNG file.
#[derive(Debug, Parser)]
#[command(name = "fillet-studio", version)]
struct StudioArgs {
    /// Output PNG path.
    #[arg(short, long, default_value = "rounded.png")]
    out: PathBuf,

    /// Rect width in logical pixels.
    #[arg(long, default_value_t = 256.0)]
    width: f32,

    /// Rect height in logical pixels.
    #[arg(long, default_value_t = 160.0)]
    height: f32,

    /// Corner radius (doubled before shading, like the independent-corners variant).
    #[arg(short, long, default_value_t = DEFAULT_RADIUS, allow_negative_numbers = true)]
    radius: f32,

    /// Output pixels per logical pixel.
    #[arg(short, long, default_value_t = 1.0)]
    scale: f32,

    /// Atlas PNG to sample from; a flat tint is drawn without it.
    #[arg(long)]
    atlas: Option<PathBuf>,

    /// Sprite region inside the atlas as `x,y,w,h` in texels.
    #[arg(long, value_parser = parse_region, requires = "atlas")]
    sprite: Option<Rect>,

    /// Tint as `RRGGBB` or `RRGGBBAA` hex.
    #[arg(long, value_parser = parse_hex_color, default_value = "ffffffff")]
    tint: Color,

    /// Log filter, `env_logger` syntax.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = StudioArgs::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..LoggingConfig::default()
    });

    let texture = args.atlas.as_deref().map(load_texture).transpose()?;

    let mut graphic = Graphic::new(Rect::new(0.0, 0.0, args.width, args.height));
    if let Some(tex) = &texture {
        let sprite = match args.sprite {
            Some(region) => Sprite::new(tex.size(), region),
            None => Sprite::whole(tex.size()),
        };
        graphic.set_sprite(Some(sprite));
    }

    let corners = RoundedCorners::create(&mut graphic, args.radius)
        .context("configuring rounded corners")?;

    let rasterizer = Rasterizer::new(RasterConfig { scale: args.scale });
    let pixmap = rasterizer
        .render(&graphic, texture.as_ref(), args.tint)
        .context("rasterizing")?;
    anyhow::ensure!(!pixmap.is_empty(), "nothing to draw for a {}x{} rect", args.width, args.height);

    image::save_buffer(
        &args.out,
        &pixmap.to_rgba8(),
        pixmap.width(),
        pixmap.height(),
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("writing {}", args.out.display()))?;

    let params = corners.material().params();
    log::info!(
        "wrote {} ({}x{}, params {:?}, outer uv {:?})",
        args.out.display(),
        pixmap.width(),
        pixmap.height(),
        params.width_height_radius,
        params.outer_uv,
    );

    corners.destroy(&mut graphic);
    Ok(())
}

fn load_texture(path: &std::path::Path) -> Result<Texture> {
    let img = image::open(path)
        .with_context(|| format!("reading atlas {}", path.display()))?
        .into_rgba8();
    let (w, h) = img.dimensions();
    Texture::from_rgba8(w, h, img.as_raw()).context("decoding atlas")
}

fn parse_region(s: &str) -> Result<Rect, String> {
    let parts: Vec<f32> = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("`{p}`: {e}")))
        .collect::<Result<_, _>>()?;
    match parts.as_slice() {
        &[x, y, w, h] => Ok(Rect::new(x, y, w, h)),
        _ => Err(format!("expected x,y,w,h, got {} values", parts.len())),
    }
}

fn parse_hex_color(s: &str) -> Result<Color, String> {
    let hex = s.trim_start_matches('#');
    let byte = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|b| u8::from_str_radix(b, 16).ok())
            .ok_or_else(|| format!("invalid hex color `{s}`"))
    };
    match hex.len() {
        6 => Ok(Color::from_rgba8([byte(0)?, byte(2)?, byte(4)?, 255])),
        8 => Ok(Color::from_rgba8([byte(0)?, byte(2)?, byte(4)?, byte(6)?])),
        _ => Err(format!("invalid hex color `{s}`")),
    }
}
