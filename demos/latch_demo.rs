//! usage demonstration for the latch primitive
//!
//! run with `cargo run --example latch_demo`

use latcher::Latch;
use log::info;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // a latch can carry two handlers, one per direction
    let mut num: Latch<i32, i32> = Latch::new().on_set(|n| n).on_unset(|n| n);

    // disengaged, so this flips and runs the set handler
    num.set(5);
    info!("num.set(5): flipped={} result={:?}", num.flipped(), num.result());

    // already engaged, nothing runs
    num.set(6);
    info!("num.set(6): flipped={} result={:?}", num.flipped(), num.result());

    // while engaged, unset flips back and runs the other handler
    num.unset(4);
    info!("num.unset(4): flipped={} result={:?}", num.flipped(), num.result());

    // a latch may carry a single handler; unset then only resets state
    let mut echo: Latch<String, &str> = Latch::new().on_set(|s: &str| s.to_string());

    echo.set("hello world");
    match echo.result() {
        Some(s) => info!("echo engaged: {}", s),
        None => info!("echo: no flip"),
    }
    echo.set("goodbye world");
    match echo.result() {
        Some(s) => info!("echo engaged: {}", s),
        None => info!("echo: no flip"),
    }
    echo.unset("anyone there?");
    info!("echo.unset: flipped={} result={:?}", echo.flipped(), echo.result());

    // handler output does not have to be used
    let mut print: Latch<usize, &str> = Latch::new()
        .on_set(|s: &str| {
            info!("printing: {}", s);
            s.len()
        })
        .on_unset(|s: &str| {
            info!("printing: {}", s);
            s.len()
        });
    print.set("print it");
    print.set("print it also");
    print.unset("finally, print it");

    // handlers returning () need no workaround, the capture slot still
    // distinguishes "fired" from "no flip"
    let mut fire: Latch<(), &str> = Latch::new().on_set(|s: &str| info!("fired once: {}", s));
    fire.set("first");
    fire.set("second");
    info!("fire.set(\"second\"): flipped={}", fire.flipped());
}
