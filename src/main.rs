use std::io::{self, Read};
use std::path::Path;
use std::process;

use svg_sprite::SpriteDocument;

/// Stock XML declaration emitted by --standalone
const DEFAULT_XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Stock SVG 1.1 doctype emitted by --standalone
const DEFAULT_DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("svg-sprite - Assemble an SVG sprite from pre-rendered fragments");
        println!();
        println!("Usage: svg-sprite [OPTIONS] [FRAGMENT_FILES...]");
        println!();
        println!("Concatenates the given fragment files (or stdin) into a single <svg>");
        println!("document and prints it, or writes it with -o.");
        println!();
        println!("Options:");
        println!("  -h, --help                 Show this help message");
        println!("  -n, --namespaces           Inject xmlns and xmlns:xlink on the root element");
        println!("  -s, --standalone           Emit the stock XML declaration and SVG 1.1 doctype");
        println!("  --xml-declaration <text>   Explicit XML declaration");
        println!("  --doctype <text>           Explicit doctype declaration");
        println!("  --attr <name=value>        Root attribute (repeatable)");
        println!("  --attrs <file.json>        Root attributes from a JSON object file");
        println!("  -o, --output <path>        Write to a file instead of stdout");
        println!();
        println!("Example:");
        println!("  svg-sprite -n --attr viewBox='0 0 24 24' icons/*.svg -o dist/sprite.svg");
        return;
    }

    let mut xml_declaration = String::new();
    let mut doctype_declaration = String::new();
    let mut attributes: Vec<(String, String)> = Vec::new();
    let mut namespaces = false;
    let mut output: Option<String> = None;
    let mut fragment_files: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].clone();
        match arg.as_str() {
            "-n" | "--namespaces" => namespaces = true,
            "-s" | "--standalone" => {
                xml_declaration = DEFAULT_XML_DECLARATION.to_string();
                doctype_declaration = DEFAULT_DOCTYPE.to_string();
            }
            "--xml-declaration" => xml_declaration = take_value(&args, &mut i, &arg),
            "--doctype" => doctype_declaration = take_value(&args, &mut i, &arg),
            "--attr" => {
                let pair = take_value(&args, &mut i, &arg);
                match pair.split_once('=') {
                    Some((name, value)) => attributes.push((name.to_string(), value.to_string())),
                    None => fail(&format!("--attr expects name=value, got '{}'", pair)),
                }
            }
            "--attrs" => {
                let file = take_value(&args, &mut i, &arg);
                load_attrs(&file, &mut attributes);
            }
            "-o" | "--output" => output = Some(take_value(&args, &mut i, &arg)),
            _ if arg.starts_with('-') => fail(&format!("Unknown option: {}", arg)),
            _ => fragment_files.push(arg),
        }
        i += 1;
    }

    let attr_refs: Vec<(&str, &str)> = attributes
        .iter()
        .map(|(n, v)| (n.as_str(), v.as_str()))
        .collect();
    let mut sprite = SpriteDocument::new(&xml_declaration, &doctype_declaration, &attr_refs, namespaces);

    // Fragments come from the listed files in argument order, or from stdin
    if fragment_files.is_empty() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .unwrap_or_else(|e| fail(&format!("Failed to read from stdin: {}", e)));
        if buf.trim().is_empty() {
            fail("No input provided");
        }
        sprite.add_one(buf);
    } else {
        for file in &fragment_files {
            let fragment = std::fs::read_to_string(file)
                .unwrap_or_else(|e| fail(&format!("Failed to read {}: {}", file, e)));
            sprite.add_one(fragment);
        }
    }

    match output {
        Some(path) => {
            let base = Path::new(&path)
                .parent()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            let handle = sprite.to_file(base, path.as_str());
            std::fs::write(&handle.path, &handle.contents)
                .unwrap_or_else(|e| fail(&format!("Failed to write {}: {}", path, e)));
        }
        None => println!("{}", sprite.serialize()),
    }
}

/// Consume the value following an option, or bail out.
fn take_value(args: &[String], i: &mut usize, option: &str) -> String {
    *i += 1;
    match args.get(*i) {
        Some(value) => value.clone(),
        None => fail(&format!("{} expects a value", option)),
    }
}

/// Read root attributes from a JSON object file, in document order.
/// Scalar values other than strings are kept as their JSON text.
fn load_attrs(file: &str, attributes: &mut Vec<(String, String)>) {
    let text = std::fs::read_to_string(file)
        .unwrap_or_else(|e| fail(&format!("Failed to read {}: {}", file, e)));
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&text)
        .unwrap_or_else(|e| fail(&format!("Failed to parse {}: {}", file, e)));
    for (name, value) in object {
        let value = match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        attributes.push((name, value));
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}
