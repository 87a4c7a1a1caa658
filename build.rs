// Copies the static site (index page, stylesheet, wasm-pack output in
// `static/pkg`) to `dist/` so it can be deployed as-is.
use std::path::Path;

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        std::fs::remove_dir_all(out_dir).ok();
    }
    std::fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let options = CopyOptions::new().overwrite(true).content_only(true);
        if let Err(e) = copy(static_dir, out_dir, &options) {
            println!("cargo:warning=failed to copy static/ to dist/: {e}");
        }
    }
}
