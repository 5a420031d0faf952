use std::env;
use std::fs::File;

use barcode_bmp::{Bitmap, BwColor, Rect};
use qrcode::QrCode;

//
// cargo run --example qr_label [DATA]
//
// Rasterizes a QR code into the monochrome bitmap, one filled rectangle
// per dark module, and writes it out as qr.bmp.
//
fn main() {
    env_logger::init();

    let data = env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com".to_string());

    let code = QrCode::new(data.as_bytes()).unwrap();
    let modules = code.width() as u32;
    let colors = code.to_colors();

    let scale = 4;
    let quiet_zone = 4 * scale;
    let side = modules * scale + quiet_zone * 2;

    let mut bitmap = Bitmap::new(side, side).unwrap();
    let mut canvas = bitmap.canvas();

    for my in 0..modules {
        for mx in 0..modules {
            if colors[(my * modules + mx) as usize] == qrcode::Color::Dark {
                let bounds = Rect::new(
                    quiet_zone + mx * scale,
                    quiet_zone + my * scale,
                    scale,
                    scale,
                );
                canvas.fill(BwColor::Black, bounds).unwrap();
            }
        }
    }
    drop(canvas);

    let mut file = File::create("qr.bmp").unwrap();
    bitmap.write_bmp(&mut file).unwrap();

    println!(
        "wrote {}x{} px QR ({} modules at {} px/module) to qr.bmp",
        side, side, modules, scale
    );
}
