use std::io::{self, Read};

use citcall::{CitcallClient, Config};

/// Decode a callback body piped on stdin, e.g. `echo '{"rc":0}' | callback`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut body = Vec::new();
    io::stdin().read_to_end(&mut body)?;

    let client = CitcallClient::new(Config::from_env()?)?;
    let payload = client.get_callback(&body);
    println!(
        "rc: {:?}, msg: {:?}, default: {}",
        payload.rc(),
        payload.msg(),
        payload.is_default()
    );

    Ok(())
}
