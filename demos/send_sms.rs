use std::io;

use citcall::{CitcallClient, Config, MessageText, Msisdn, SendSms};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let msisdn = std::env::var("CITCALL_MSISDN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CITCALL_MSISDN environment variable is required",
        )
    })?;
    let message = std::env::var("CITCALL_MESSAGE")
        .unwrap_or_else(|_| "Hello from the citcall demo.".to_owned());

    let client = CitcallClient::new(Config::from_env()?)?;
    let request = SendSms::new(Msisdn::new(msisdn)?, MessageText::new(message));

    let response = client.send(request).await?;
    println!("rc: {:?}, info: {:?}", response.rc(), response.info());

    Ok(())
}
