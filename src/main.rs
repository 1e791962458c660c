use arsc_reader::parse_table;
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-resources.arsc> [@RESOURCE_ID ...]", args[0]);
        process::exit(1);
    }

    let arsc_path = &args[1];
    let lookups = &args[2..];

    println!("Reading resource table: {}", arsc_path);
    println!("{}", "=".repeat(60));

    let data = match fs::read(arsc_path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("ERROR: Failed to read {}", arsc_path);
            eprintln!("  {}", e);
            process::exit(1);
        }
    };

    match parse_table(&data) {
        Ok(resources) => {
            println!("\nDecoded {} resource ids", resources.len());

            println!("\nSample entries (first 10):");
            for (i, (id, values)) in resources.iter().take(10).enumerate() {
                println!("  {}. {} = {:?}", i + 1, id, values);
            }
            if resources.len() > 10 {
                println!("  ... and {} more", resources.len() - 10);
            }

            if !lookups.is_empty() {
                println!("\nLookups:");
                for reference in lookups {
                    match resources.get(reference) {
                        Some(values) => println!("  {} = {:?}", reference, values),
                        // Unresolvable references fall back to their raw form.
                        None => println!("  {} (unresolved)", reference),
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to decode resource table");
            eprintln!("  {}", e);
            process::exit(1);
        }
    }
}
