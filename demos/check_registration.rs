use std::io;

use dvla_vehicle_enquiry::is_valid_registration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut plates = std::env::args().skip(1).peekable();
    if plates.peek().is_none() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "usage: check_registration <PLATE>...",
        )
        .into());
    }

    for plate in plates {
        let verdict = if is_valid_registration(&plate) {
            "valid"
        } else {
            "invalid"
        };
        println!("{plate}: {verdict}");
    }

    Ok(())
}
