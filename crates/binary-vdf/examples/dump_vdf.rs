//! Simple decoder to inspect binary VDF files such as `shortcuts.vdf`.

use std::fs;
use std::process;

use binary_vdf::{compute_shortcut_url, decode_prefix, VdfMap, VdfValue};

fn print_map(map: &VdfMap, indent: usize) {
    let pad = "  ".repeat(indent);
    for (key, value) in map {
        match value {
            VdfValue::String(s) => println!("{}{:?} = {:?}", pad, key, s),
            VdfValue::Number(n) => println!("{}{:?} = {} (0x{:08x})", pad, key, n, n),
            VdfValue::Map(nested) => {
                println!("{}{:?} {{", pad, key);
                print_map(nested, indent + 1);
                println!("{}}}", pad);
            }
        }
    }
}

/// Prints the launch URL of every map that looks like a shortcut entry.
fn print_shortcuts(map: &VdfMap) {
    if let (Some(name), Some(exe)) = (map.get_str("AppName"), map.get_str("Exe")) {
        println!("{} -> {}", name, compute_shortcut_url(name, exe));
    }
    for value in map.values() {
        if let Some(nested) = value.as_map() {
            print_shortcuts(nested);
        }
    }
}

fn main() {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: dump_vdf <file.vdf>");
        process::exit(2);
    };

    let data = match fs::read(&path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("failed to read {}: {}", path, e);
            process::exit(1);
        }
    };
    println!("Reading: {} ({} bytes)", path, data.len());

    let (map, end) = match decode_prefix(&data, 0) {
        Ok(decoded) => decoded,
        Err(e) => {
            eprintln!("failed to decode {}: {} [{}]", path, e, e.code().code());
            process::exit(1);
        }
    };
    if end < data.len() {
        println!("Ignoring {} trailing bytes", data.len() - end);
    }

    println!("\n=== Contents ===");
    print_map(&map, 0);

    println!("\n=== Shortcuts ===");
    print_shortcuts(&map);
}
