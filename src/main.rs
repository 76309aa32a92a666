//! Sends the example user to the local endpoint once.
//! The other verbs are available through `userprobe-cli`.

use userprobe::{HttpUserClient, UserEndpoint, UserRecord};

fn main() -> anyhow::Result<()> {
    userprobe::init_logging();

    let client = HttpUserClient::default();
    let user = UserRecord::example();
    client.send_post(&user.to_payload()?)?;
    Ok(())
}
