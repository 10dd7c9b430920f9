use std::io;

use citcall::{
    CitcallClient, Config, Msisdn, OtpToken, SendOtp, SendOtpOptions, TrxId, VerificationCode,
    VerifyOtp,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let msisdn = std::env::var("CITCALL_MSISDN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CITCALL_MSISDN environment variable is required",
        )
    })?;
    let client = CitcallClient::new(Config::from_env()?)?;

    if let Ok(trx_id) = std::env::var("CITCALL_TRX_ID") {
        let code = std::env::var("CITCALL_CODE").map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "CITCALL_CODE environment variable is required when CITCALL_TRX_ID is set",
            )
        })?;
        let request = VerifyOtp::new(
            TrxId::new(trx_id),
            Msisdn::new(msisdn)?,
            VerificationCode::new(code),
        );
        let response = client.verify_otp(request).await?;
        println!("rc: {:?}, info: {:?}", response.rc(), response.info());
        return Ok(());
    }

    let token = std::env::var("CITCALL_TOKEN").unwrap_or_else(|_| "123456".to_owned());
    let request = SendOtp::new(
        Msisdn::new(msisdn)?,
        OtpToken::new(token)?,
        SendOtpOptions { expires: 300 },
    );
    let response = client.send_otp(request).await?;
    println!(
        "rc: {:?}, info: {:?}, trxid: {:?}",
        response.rc(),
        response.info(),
        response.trxid()
    );

    Ok(())
}
