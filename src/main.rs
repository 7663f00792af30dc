//! Minimal CLI demonstrating the library. Commands are intentionally small
//! and auditable so readers can see exactly how tokens are produced and
//! consumed; nothing here is part of the library contract.

use std::env;

use envelock::crypto::digest::{sha256_hex, sha512_base64};
use envelock::crypto::envelope::{decrypt, encrypt};

// Sample credit-card-shaped input used by the demo round trip.
const DEMO_PLAIN_TEXT: &str = "4111111111111111";
const DEMO_KEY: &str = "Something you can't guess";

fn print_usage() {
    eprintln!("Commands:\n  encrypt <key> <plaintext>\n  decrypt <key> <token>\n  hash-hex <text>\n  hash-b64 <text>\n  demo");
}

fn run_demo() {
    println!("Envelope round trip:");
    match encrypt(DEMO_PLAIN_TEXT, DEMO_KEY) {
        Ok(token) => {
            println!("  plain text : {DEMO_PLAIN_TEXT}");
            println!("  token      : {token}");
            match decrypt(&token, DEMO_KEY) {
                Ok(plain) => println!("  round trip : {plain}"),
                Err(err) => eprintln!("  decryption failed: {err}"),
            }
        }
        Err(err) => eprintln!("  encryption failed: {err}"),
    }
    println!("SHA-256 hex:");
    match sha256_hex(DEMO_PLAIN_TEXT) {
        Ok(hex) => println!("  {hex}"),
        Err(err) => eprintln!("  hashing failed: {err}"),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "encrypt" => {
            if args.len() != 4 {
                return print_usage();
            }
            match encrypt(&args[3], &args[2]) {
                Ok(token) => println!("{token}"),
                Err(err) => eprintln!("encryption failed: {err}"),
            }
        }
        "decrypt" => {
            if args.len() != 4 {
                return print_usage();
            }
            match decrypt(&args[3], &args[2]) {
                Ok(plain) => println!("{plain}"),
                Err(err) => eprintln!("decryption failed: {err}"),
            }
        }
        "hash-hex" => {
            if args.len() != 3 {
                return print_usage();
            }
            match sha256_hex(&args[2]) {
                Ok(hex) => println!("{hex}"),
                Err(err) => eprintln!("hashing failed: {err}"),
            }
        }
        "hash-b64" => {
            if args.len() != 3 {
                return print_usage();
            }
            match sha512_base64(&args[2]) {
                Ok(encoded) => println!("{encoded}"),
                Err(err) => eprintln!("hashing failed: {err}"),
            }
        }
        "demo" => run_demo(),
        _ => print_usage(),
    }
}
