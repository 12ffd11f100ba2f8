use anyhow::Result;
use std::path::Path;
use std::process::Command;
use ytconvert_core::config::Config;

pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;

    println!("ytconvert dependency check\n");

    print!("yt-dlp:        ");
    let all_ok = match config.yt_dlp_path() {
        Ok(path) => match Command::new(&path).arg("--version").output() {
            Ok(out) if out.status.success() => {
                let v = String::from_utf8_lossy(&out.stdout);
                println!("OK ({}, {})", v.trim(), path.display());
                true
            }
            _ => {
                println!("FOUND at {} but failed to get version", path.display());
                false
            }
        },
        Err(_) => {
            println!("NOT FOUND");
            println!("           Install with: pip install yt-dlp");
            false
        }
    };

    print!("bind address:  ");
    let bind_ok = match config.bind_addr() {
        Ok(addr) => {
            println!("OK ({})", addr);
            true
        }
        Err(e) => {
            println!("INVALID ({})", e);
            false
        }
    };

    println!();
    if all_ok && bind_ok {
        println!("All dependencies OK!");
    } else {
        println!("Some checks failed. See above for details.");
    }

    Ok(())
}
