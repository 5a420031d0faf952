use std::env;
use std::fs::File;

use barcode_bmp::{Bitmap, Brush, BwColor};

//
// cargo run --example bars [out.bmp]
//
// Paints a hand-rolled bar pattern the way a symbology encoder would
// drive the crate: white background, then one fill per bar.
//
fn main() {
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{}:{}] {} - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.level(),
                record.args()
            )
        })
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| "out.bmp".to_string());

    // Bar/space widths in modules, narrow = 1 and wide = 3, starting and
    // ending with a bar. Loosely a Code 39 asterisk plus filler.
    let widths: [u32; 19] = [1, 3, 1, 1, 3, 1, 3, 1, 1, 1, 1, 3, 3, 1, 1, 3, 1, 1, 1];

    let scale = 2;
    let quiet_zone = 10 * scale;
    let bar_height = 60;
    let total_modules: u32 = widths.iter().sum();
    let width = total_modules * scale + quiet_zone * 2;

    let mut bitmap = Bitmap::new(width, bar_height).unwrap();
    let mut canvas = bitmap.canvas();

    let ink = BwColor::from(Brush::Black);
    let mut x = quiet_zone;
    for (i, &modules) in widths.iter().enumerate() {
        let w = modules * scale;
        if i % 2 == 0 {
            canvas.fill_rect(ink, x, 0, w, bar_height).unwrap();
        }
        x += w;
    }
    drop(canvas);

    let mut file = File::create(&path).unwrap();
    bitmap.write_bmp(&mut file).unwrap();

    println!("wrote {}x{} barcode to {}", width, bar_height, path);
}
