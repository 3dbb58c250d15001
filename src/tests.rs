use {
  crate::{
    canvas::Pixel,
    config::Config,
    error::{Error, Result},
    palette::Palette,
    generate_seeds, render, run
  },
  std::path::PathBuf
};

fn temp_path(name: &str) -> PathBuf {
  std::env::temp_dir().join(format!("voronoi-raster-{}-{}", std::process::id(), name))
}

fn in_any_disk(seeds: &[crate::geometry::Seed], radius: u32, x: u32, y: u32) -> bool {
  seeds.iter().any(|s| {
    let (dx, dy) = (x as i64 - s.position.x as i64, y as i64 - s.position.y as i64);
    dx * dx + dy * dy <= (radius * radius) as i64
  })
}

#[test] fn run_writes_ppm() -> Result<()> {
  let output = temp_path("run.ppm");
  let config = Config {
    point_count: 12,
    width: 64,
    height: 48,
    seed: Some(1),
    output: output.clone(),
    ..Default::default()
  };
  run(&config)?;
  let bytes = std::fs::read(&output).map_err(|source| Error::Io { path: output.clone(), source })?;
  std::fs::remove_file(&output).ok();

  let header = b"P6\n64 48\n255\n";
  assert_eq!(&bytes[..header.len()], header);
  assert_eq!(bytes.len() - header.len(), 3 * 64 * 48);
  Ok(())
}

#[test] fn run_rejects_invalid_config() {
  let config = Config { point_count: 0, output: temp_path("never.ppm"), ..Default::default() };
  let err = run(&config).unwrap_err();
  assert_eq!(err.exit_code(), 2);
  assert!(!config.output.exists());
}

#[test] fn single_seed_fills_everything_but_its_marker() -> Result<()> {
  let palette = Palette::classic();
  let config = Config { point_count: 1, width: 40, height: 30, seed: Some(3), ..Default::default() };
  let seeds = generate_seeds(&config, &palette, &mut config.rng());
  let canvas = render(&config, &seeds, &palette)?;

  canvas.pixels().for_each(|(p, px)| {
    if in_any_disk(&seeds, config.marker_radius, p.x, p.y) {
      assert_eq!(px, Pixel::BLACK);
    } else {
      assert_eq!(px, seeds[0].color);
    }
  });
  Ok(())
}

#[test] fn same_seed_same_image() -> Result<()> {
  let palette = Palette::classic();
  let config = Config {
    point_count: 25,
    exponent: 1.5,
    width: 80,
    height: 60,
    auto_colors: true,
    seed: Some(99),
    ..Default::default()
  };
  let a = render(&config, &generate_seeds(&config, &palette, &mut config.rng()), &palette)?;
  let serial = Config { parallel: false, ..config.clone() };
  let b = render(&serial, &generate_seeds(&serial, &palette, &mut serial.rng()), &palette)?;
  assert_eq!(a, b);
  Ok(())
}

#[test] fn every_pixel_is_seed_or_marker_color() -> Result<()> {
  let palette = Palette::classic();
  let config = Config { point_count: 20, width: 50, height: 50, seed: Some(4), ..Default::default() };
  let seeds = generate_seeds(&config, &palette, &mut config.rng());
  let canvas = render(&config, &seeds, &palette)?;
  assert!(canvas.as_slice().iter()
    .all(|px| *px == palette.marker() || seeds.iter().any(|s| s.color == *px)));
  Ok(())
}
