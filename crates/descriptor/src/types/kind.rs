use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde_json::Value;

/// Where a descriptor's containers are placed by the orchestration platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LaunchType {
    Fargate,
    Ec2,
}

impl LaunchType {
    pub const ALL: [LaunchType; 2] = [LaunchType::Fargate, LaunchType::Ec2];

    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchType::Fargate => "FARGATE",
            LaunchType::Ec2 => "EC2",
        }
    }
}

impl fmt::Display for LaunchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LaunchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LaunchType::ALL.into_iter().find(|t| t.as_str() == s).ok_or_else(|| {
            format!("unknown launch type '{s}', expected one of: FARGATE, EC2")
        })
    }
}

/// Transport protocol of a port mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    #[default]
    Tcp,
    Udp,
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Protocol::Tcp),
            "udp" => Ok(Protocol::Udp),
            other => Err(format!("unknown protocol '{other}', expected one of: tcp, udp")),
        }
    }
}

/// Which schema a document is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    /// A service definition (`cluster`, `serviceName`, ...).
    Service,
    /// A task definition (`family`, `containers`, ...).
    Task,
    /// Any other tree. Substitution only, no schema.
    Fragment,
}

impl DescriptorKind {
    /// Classify a document by its top-level keys.
    ///
    /// Task keys win over service keys when a document carries both.
    pub fn detect(document: &Value) -> DescriptorKind {
        let Some(obj) = document.as_object() else { return DescriptorKind::Fragment };
        if obj.contains_key("family") || obj.contains_key("containers") {
            DescriptorKind::Task
        } else if obj.contains_key("serviceName") || obj.contains_key("cluster") {
            DescriptorKind::Service
        } else {
            DescriptorKind::Fragment
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorKind::Service => f.write_str("service"),
            DescriptorKind::Task => f.write_str("task"),
            DescriptorKind::Fragment => f.write_str("fragment"),
        }
    }
}

/// Template source syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Hcl,
}

impl Format {
    /// `.hcl` files are HCL; everything else is treated as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Format {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("hcl") => Format::Hcl,
            _ => Format::Json,
        }
    }
}
