use casement::{Camera, CameraMode, PixelBuffer, Point, Rectangle, Shape, Transform};

const INK: u32 = 0xFF00_00FF;

fn unit_rect() -> Shape {
    Shape::from(Rectangle::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0)))
}

#[test]
fn t03_camera_draws_into_its_view() {
    let mut pixels = vec![0u32; 20 * 20];
    let mut screen = PixelBuffer::new(&mut pixels, 20, 20).unwrap();
    let cam = Camera::new((5, 5), 10, 10);
    let shape = Shape::from(Rectangle::new(Point::new(1.0, 1.0), Point::new(3.0, 3.0)));
    cam.draw(&mut screen, &shape, INK);
    assert_eq!(screen.get((6, 6)), Some(INK));
    assert_eq!(screen.get((7, 7)), Some(INK));
    assert_eq!(screen.get((5, 5)), Some(0));
    assert_eq!(screen.get((8, 8)), Some(0));
    drop(screen);
    assert_eq!(pixels.iter().filter(|&&c| c == INK).count(), 4);
}

#[test]
fn t03_camera_transform_maps_world_space() {
    let mut pixels = vec![0u32; 20 * 20];
    let mut screen = PixelBuffer::new(&mut pixels, 20, 20).unwrap();
    let cam = Camera::new((5, 5), 10, 10).with_transform(Transform::new_scale(2.0));
    cam.draw(&mut screen, &unit_rect(), INK);
    // the unit rect scales to [0,4) x [0,4) inside the view
    assert_eq!(screen.get((5, 5)), Some(INK));
    assert_eq!(screen.get((8, 8)), Some(INK));
    assert_eq!(screen.get((9, 9)), Some(0));
    drop(screen);
    assert_eq!(pixels.iter().filter(|&&c| c == INK).count(), 16);
}

#[test]
fn t03_centered_mode_recenters_the_origin() {
    let mut pixels = vec![0u32; 10 * 10];
    let mut screen = PixelBuffer::new(&mut pixels, 10, 10).unwrap();
    let cam = Camera::new((0, 0), 10, 10).with_mode(CameraMode::Centered);
    cam.draw(&mut screen, &unit_rect(), INK);
    // world (0,0) sits at the view center (5,5)
    assert_eq!(screen.get((5, 5)), Some(INK));
    assert_eq!(screen.get((6, 6)), Some(INK));
    assert_eq!(screen.get((4, 4)), Some(0));
    assert_eq!(screen.get((7, 7)), Some(0));
}

#[test]
fn t03_camera_view_clips_drawing() {
    let mut pixels = vec![0u32; 10 * 10];
    let mut screen = PixelBuffer::new(&mut pixels, 10, 10).unwrap();
    let cam = Camera::new((4, 4), 4, 4);
    let big = Shape::from(Rectangle::new(Point::new(-10.0, -10.0), Point::new(10.0, 10.0)));
    cam.draw(&mut screen, &big, INK);
    drop(screen);
    // only the camera's 4x4 window is painted
    assert_eq!(pixels.iter().filter(|&&c| c == INK).count(), 16);
    assert_eq!(pixels[4 * 10 + 4], INK);
    assert_eq!(pixels[3 * 10 + 4], 0);
}

#[test]
fn t03_view_is_stale_until_update() {
    let mut pixels = vec![0u32; 20 * 20];
    let mut screen = PixelBuffer::new(&mut pixels, 20, 20).unwrap();
    let mut cam = Camera::new((0, 0), 5, 5);
    cam.position = (10, 10);
    // the cached view still points at the old corner
    cam.draw(&mut screen, &unit_rect(), INK);
    assert_eq!(screen.get((0, 0)), Some(INK));
    assert_eq!(screen.get((10, 10)), Some(0));
    screen.clear(0);
    cam.update_view();
    cam.draw(&mut screen, &unit_rect(), INK);
    assert_eq!(screen.get((0, 0)), Some(0));
    assert_eq!(screen.get((10, 10)), Some(INK));
    assert_eq!(screen.get((11, 11)), Some(INK));
}

#[test]
fn t03_offscreen_camera_draws_nothing() {
    let mut pixels = vec![0u32; 10 * 10];
    let mut screen = PixelBuffer::new(&mut pixels, 10, 10).unwrap();
    let cam = Camera::new((50, 50), 8, 8);
    cam.draw(&mut screen, &unit_rect(), INK);
    drop(screen);
    assert!(pixels.iter().all(|&c| c == 0));
}

#[test]
fn t03_centered_resize_is_stale_until_update() {
    let mut pixels = vec![0u32; 20 * 20];
    let mut screen = PixelBuffer::new(&mut pixels, 20, 20).unwrap();
    let mut cam = Camera::new((0, 0), 10, 10).with_mode(CameraMode::Centered);
    cam.width = 20;
    cam.height = 20;
    // recentering still uses the cached 10x10 view
    cam.draw(&mut screen, &unit_rect(), INK);
    assert_eq!(screen.get((5, 5)), Some(INK));
    assert_eq!(screen.get((10, 10)), Some(0));
    screen.clear(0);
    cam.update_view();
    cam.draw(&mut screen, &unit_rect(), INK);
    assert_eq!(screen.get((10, 10)), Some(INK));
    assert_eq!(screen.get((5, 5)), Some(0));
}
