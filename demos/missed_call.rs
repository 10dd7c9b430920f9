use std::io;

use citcall::{Call, CallOptions, CitcallClient, Config, GatewayNumber, Msisdn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let msisdn = std::env::var("CITCALL_MSISDN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CITCALL_MSISDN environment variable is required",
        )
    })?;
    let gateway = match std::env::var("CITCALL_GATEWAY") {
        Ok(value) => GatewayNumber::new(value.trim().parse()?)?,
        Err(_) => GatewayNumber::default(),
    };
    let asynchronous = std::env::var("CITCALL_ASYNC").is_ok_and(|value| value == "1");

    let client = CitcallClient::new(Config::from_env()?)?;
    let request = Call::new(
        Msisdn::new(msisdn)?,
        CallOptions {
            gateway,
            asynchronous,
        },
    );

    let response = client.call(request).await?;
    println!(
        "rc: {:?}, trxid: {:?}, body: {}",
        response.rc(),
        response.trxid(),
        response.body()
    );

    Ok(())
}
