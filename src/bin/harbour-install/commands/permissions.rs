//! `harbour-install permissions` command

use anyhow::Result;

use harbour_install::install::Permission;

pub fn execute() -> Result<()> {
    for permission in Permission::ALL {
        println!("{:<14} {:04o}", permission.as_str(), permission.mode_bits());
    }
    Ok(())
}
