use std::fs;
use std::path::PathBuf;

use crate::access::UsageAccess;

/// Usage access on Linux: other processes must be visible in `/proc`.
///
/// A `proc` mount with `hidepid` hides every process not owned by the
/// caller, which leaves the usage statistics incomplete. Root is exempt.
pub struct ProcAccess {
    proc_root: PathBuf,
}

impl Default for ProcAccess {
    fn default() -> Self {
        Self {
            proc_root: PathBuf::from("/proc"),
        }
    }
}

impl ProcAccess {
    pub fn with_root(proc_root: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: proc_root.into(),
        }
    }

    fn is_root(&self) -> bool {
        fs::read_to_string(self.proc_root.join("self/status"))
            .ok()
            .and_then(|status| effective_uid(&status))
            == Some(0)
    }

    fn hidepid_enabled(&self) -> bool {
        fs::read_to_string(self.proc_root.join("mounts"))
            .map(|mounts| mounts_hide_pids(&mounts))
            .unwrap_or(false)
    }
}

impl UsageAccess for ProcAccess {
    fn has_usage_access(&self) -> bool {
        if fs::read_dir(&self.proc_root).is_err() {
            return false;
        }
        self.is_root() || !self.hidepid_enabled()
    }

    fn grant_instructions(&self) -> &'static str {
        "Usage access is required to get stats. Remount /proc without hidepid \
         (e.g. `mount -o remount,hidepid=0 /proc`) or run drainwatch as root."
    }
}

fn effective_uid(status: &str) -> Option<u32> {
    status
        .lines()
        .find(|line| line.starts_with("Uid:"))
        .and_then(|line| line.split_whitespace().nth(2))
        .and_then(|uid| uid.parse().ok())
}

fn mounts_hide_pids(mounts: &str) -> bool {
    mounts.lines().any(|line| {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 || fields[1] != "/proc" || fields[2] != "proc" {
            return false;
        }
        fields[3].split(',').any(|opt| {
            matches!(
                opt,
                "hidepid=1" | "hidepid=2" | "hidepid=noaccess" | "hidepid=invisible"
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidepid_detection() {
        let open = "proc /proc proc rw,nosuid,nodev,noexec,relatime 0 0\n";
        let hidden = "proc /proc proc rw,nosuid,nodev,noexec,relatime,hidepid=invisible 0 0\n";
        let other = "proc /mnt/proc proc rw,hidepid=2 0 0\n";

        assert!(!mounts_hide_pids(open));
        assert!(mounts_hide_pids(hidden));
        assert!(!mounts_hide_pids(other));
    }

    #[test]
    fn test_effective_uid() {
        let status = "Name:\tdrainwatch\nUid:\t1000\t0\t1000\t1000\n";
        assert_eq!(effective_uid(status), Some(0));
        assert_eq!(effective_uid("Name:\tx\n"), None);
    }

    #[test]
    fn test_missing_proc_denies_access() {
        let access = ProcAccess::with_root("/nonexistent/drainwatch/proc");
        assert!(!access.has_usage_access());
    }
}
