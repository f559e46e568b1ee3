use rasterboard_core::Rgb;

/// Color palette on the digit keys.
pub const PALETTE: [Rgb; 10] = [
    Rgb::new(0.0, 0.0, 0.0), // 0 black
    Rgb::new(1.0, 0.0, 0.0), // 1 red
    Rgb::new(0.0, 1.0, 0.0), // 2 green
    Rgb::new(0.0, 0.0, 1.0), // 3 blue
    Rgb::new(1.0, 1.0, 0.0), // 4 yellow
    Rgb::new(0.0, 1.0, 1.0), // 5 cyan
    Rgb::new(1.0, 0.0, 1.0), // 6 magenta
    Rgb::new(1.0, 0.5, 0.5), // 7
    Rgb::new(0.5, 1.0, 0.5), // 8
    Rgb::new(0.5, 0.5, 1.0), // 9
];
