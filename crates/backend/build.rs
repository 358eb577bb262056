use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=../../data");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap(); // "debug" or "release"

    // OUT_DIR is typically target/debug/build/backend-xxx/out,
    // the binary lives in target/debug
    let out_path = Path::new(&out_dir);
    let target_dir = out_path
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    if source_config.exists() {
        let dest_config = target_dir.join("config.toml");
        fs::copy(&source_config, &dest_config)
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
        println!("cargo:warning=Copied config.toml to {:?}", dest_config);
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }

    // Seed files are resolved relative to the executable, same as config.toml
    let source_data = workspace_root.join("data");
    if source_data.is_dir() {
        let dest_data = target_dir.join("data");
        fs::create_dir_all(&dest_data)
            .unwrap_or_else(|e| panic!("Failed to create {:?}: {}", dest_data, e));
        for entry in fs::read_dir(&source_data).expect("Failed to read data directory") {
            let path = entry.expect("Failed to read entry").path();
            if path.is_file() {
                let dest = dest_data.join(path.file_name().unwrap());
                fs::copy(&path, &dest)
                    .unwrap_or_else(|e| panic!("Failed to copy {:?}: {}", path, e));
            }
        }
    }
}
