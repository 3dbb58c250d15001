use {
  super::*,
  crate::{
    geometry::Dimensions,
    metric::Minkowski,
    raster::Rasterizer,
    error::Result
  }
};

const FILL: Pixel = Pixel::new(0, 128, 128);

fn filled(width: u32, height: u32) -> Canvas {
  let mut canvas = Canvas::new(width, height);
  canvas.rows_mut().for_each(|row| row.fill(FILL));
  canvas
}

fn in_disk(center: P2, radius: u32, x: u32, y: u32) -> bool {
  let (dx, dy) = (x as i64 - center.x as i64, y as i64 - center.y as i64);
  dx * dx + dy * dy <= (radius * radius) as i64
}

#[test] fn disk_matches_inclusion_test() {
  let mut canvas = filled(30, 20);
  let center = P2::new(12, 9);
  Marker { center, radius: 4, color: Pixel::BLACK }.draw(&mut canvas);

  canvas.pixels().for_each(|(p, px)| {
    let expected = if in_disk(center, 4, p.x, p.y) { Pixel::BLACK } else { FILL };
    assert_eq!(px, expected, "{:?}", p);
  });
  // bounding square corners lie outside the disk
  assert_eq!(canvas.get(16, 13), Some(FILL));
  assert_eq!(canvas.get(16, 9), Some(Pixel::BLACK));
  assert_eq!(canvas.get(12, 5), Some(Pixel::BLACK));
}

#[test] fn corner_disks_are_clipped() {
  let size = Dimensions::new(30, 20);
  let corners = [
    Seed::new(0, 0, FILL),
    Seed::new(29, 0, FILL),
    Seed::new(0, 19, FILL),
    Seed::new(29, 19, FILL)
  ];
  let mut canvas = filled(size.width, size.height);
  draw_markers(&mut canvas, &corners, 6, Pixel::BLACK);

  assert_eq!(canvas.size(), size);
  assert_eq!(canvas.as_slice().len(), 30 * 20);
  canvas.pixels().for_each(|(p, px)| {
    let covered = corners.iter().any(|s| in_disk(s.position, 6, p.x, p.y));
    assert_eq!(px == Pixel::BLACK, covered, "{:?}", p);
  });
}

#[test] fn zero_radius_marks_seed_pixel() {
  let mut canvas = filled(5, 5);
  draw_markers(&mut canvas, &[Seed::new(2, 3, FILL)], 0, Pixel::BLACK);
  assert_eq!(canvas.get(2, 3), Some(Pixel::BLACK));
  assert_eq!(canvas.pixels().filter(|(_, px)| *px == Pixel::BLACK).count(), 1);
}

#[test] fn oversized_radius_covers_canvas() {
  let mut canvas = filled(8, 6);
  draw_markers(&mut canvas, &[Seed::new(4, 3, FILL)], 256, Pixel::BLACK);
  assert!(canvas.as_slice().iter().all(|&px| px == Pixel::BLACK));
}

#[test] fn markers_override_classification() -> Result<()> {
  let size = Dimensions::new(40, 30);
  let seeds = [
    Seed::new(5, 5, Pixel::new(255, 0, 0)),
    Seed::new(6, 6, Pixel::new(0, 255, 0)),
    Seed::new(35, 25, Pixel::new(0, 0, 255))
  ];
  let mut canvas = Canvas::from_size(size);
  Rasterizer::new(&seeds, Minkowski::new(3.0))?.render(&mut canvas);
  draw_markers(&mut canvas, &seeds, 3, Pixel::BLACK);

  canvas.pixels().for_each(|(p, px)| {
    if seeds.iter().any(|s| in_disk(s.position, 3, p.x, p.y)) {
      assert_eq!(px, Pixel::BLACK, "{:?}", p);
    } else {
      assert_ne!(px, Pixel::BLACK, "{:?}", p);
    }
  });
  Ok(())
}
