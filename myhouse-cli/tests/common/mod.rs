//! Common test utilities for CLI integration tests.
//!
//! Every test gets its own data directory seeded with a small data set and
//! runs the binary with the calendar pinned to 2099-01-01.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Host with two reservations in October 2099.
#[allow(dead_code)]
pub const HOST_EMAIL: &str = "eyearnes0@sfgate.com";
/// Host with no reservations.
#[allow(dead_code)]
pub const OTHER_HOST_EMAIL: &str = "krhodes1@posterous.com";
/// Owner of reservation 1.
#[allow(dead_code)]
pub const GUEST_EMAIL: &str = "slomas0@mediafire.com";
/// Guest with no reservations.
#[allow(dead_code)]
pub const OTHER_GUEST_EMAIL: &str = "ogecks1@dagondesign.com";
/// File name of the first host's reservations.
#[allow(dead_code)]
pub const HOST_FILE: &str = "3edda6bc-ab95-49a8-8962-d50b53f84b15.csv";

/// Test environment with an isolated, seeded data directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the myhouse data directory.
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new environment with fixture data written.
    pub fn new() -> Self {
        let env = Self::empty();
        fs::create_dir_all(&env.data_dir).expect("Failed to create data dir");
        write_fixture_data(&env.data_dir);
        env
    }

    /// Create an environment whose data directory does not exist.
    pub fn empty() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("myhouse-data");
        Self { temp_dir, data_dir }
    }

    /// The binary with no flags and a clean environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("myhouse").expect("Failed to find myhouse binary");
        for var in [
            "MYHOUSE_DATA_DIR",
            "MYHOUSE_BUSY_TIMEOUT",
            "MYHOUSE_LOG_MODE",
            "MYHOUSE_STORAGE_BACKEND",
            "MYHOUSE_OUTPUT_FORMAT",
        ] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.temp_dir.path());
        cmd.env("MYHOUSE_TODAY", "2099-01-01");
        cmd
    }

    /// The binary pointed at this environment's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Contents of a file under the data directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.data_dir.join(relative)).expect("Failed to read data file")
    }

    /// Contents of the first host's reservation file.
    pub fn host_file(&self) -> String {
        self.read(&format!("reservations/{HOST_FILE}"))
    }
}

/// Writes guests, hosts and one host's reservations into `dir`.
pub fn write_fixture_data(dir: &Path) {
    fs::write(
        dir.join("guests.csv"),
        "guest_id,first_name,last_name,email,phone,state\n\
         1,Sullivan,Lomas,slomas0@mediafire.com,(702) 7768761,NV\n\
         2,Olympie,Gecks,ogecks1@dagondesign.com,(202) 2528316,DC\n\
         3,Tremain,Carncross,tcarncross2@japanpost.jp,(313) 2245034,MI\n",
    )
    .unwrap();

    fs::write(
        dir.join("hosts.csv"),
        "id,last_name,email,phone,address,city,state,postal_code,standard_rate,weekend_rate\n\
         3edda6bc-ab95-49a8-8962-d50b53f84b15,Yearnes,eyearnes0@sfgate.com,(806) 1783815,3 Nova Trail,Amarillo,TX,79182,10,15\n\
         a0d911e7-4fde-4e4a-bdb7-f047f15615e8,Rhodes,krhodes1@posterous.com,(478) 7475991,7262 Morning Avenue,Macon,GA,31296,295.00,368.75\n",
    )
    .unwrap();

    let reservations = dir.join("reservations");
    fs::create_dir_all(&reservations).unwrap();
    fs::write(
        reservations.join(HOST_FILE),
        "id,start_date,end_date,guest_id,total\n\
         2,2099-10-12,2099-10-14,3,20\n\
         1,2099-10-01,2099-10-05,1,50\n",
    )
    .unwrap();
}
