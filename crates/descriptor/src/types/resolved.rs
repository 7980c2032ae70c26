use serde_json::Value;
use std::collections::BTreeMap;

use super::{DescriptorKind, LaunchType, Protocol};

/// Fully substituted and validated descriptor, ready for the orchestration API.
///
/// Holds both the resolved document (unknown fields included) and a typed view
/// of the fields the validator understands. There are no mutators.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDescriptor {
    kind: DescriptorKind,
    document: Value,
    descriptor: Descriptor,
}

impl ResolvedDescriptor {
    pub(crate) fn new(kind: DescriptorKind, document: Value, descriptor: Descriptor) -> Self {
        ResolvedDescriptor { kind, document, descriptor }
    }

    pub fn kind(&self) -> DescriptorKind {
        self.kind
    }

    /// The resolved JSON tree.
    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Compact JSON. Object keys are sorted, so output is deterministic.
    pub fn to_json(&self) -> String {
        self.document.to_string()
    }

    pub fn to_json_pretty(&self) -> String {
        // Serializing a `Value` to a String cannot fail.
        serde_json::to_string_pretty(&self.document).unwrap_or_else(|_| self.to_json())
    }
}

/// Typed view of a resolved document.
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    Service(ServiceDescriptor),
    Task(TaskDescriptor),
    Fragment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDescriptor {
    pub cluster: String,
    pub service_name: String,
    pub task_definition_ref: String,
    pub load_balancers: Vec<LoadBalancer>,
    pub desired_count: u32,
    pub launch_type: LaunchType,
    pub deployment_config: DeploymentConfig,
    pub network: Network,
    pub health_check_grace_period_seconds: u32,
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadBalancer {
    pub target_group_ref: String,
    pub container_name: String,
    pub container_port: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentConfig {
    pub circuit_breaker_enabled: bool,
    pub rollback_on_failure: bool,
    /// May exceed 100 for rolling deploys.
    pub max_percent: u32,
    pub min_healthy_percent: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub subnet_refs: Vec<String>,
    pub security_group_refs: Vec<String>,
    pub assign_public_ip: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskDescriptor {
    pub family: String,
    pub execution_role_ref: String,
    pub task_role_ref: Option<String>,
    pub containers: Vec<ContainerSpec>,
    pub cpu: u32,
    pub memory: u32,
    pub requires_compatibilities: Vec<LaunchType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerSpec {
    pub name: String,
    pub image: String,
    pub port_mappings: Vec<PortMapping>,
    pub environment: Vec<EnvVar>,
    pub secrets: Vec<SecretRef>,
    pub health_check: Option<HealthCheck>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortMapping {
    pub container_port: u16,
    pub host_port: Option<u16>,
    pub protocol: Protocol,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecretRef {
    pub name: String,
    pub secret_ref: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthCheck {
    pub command: Vec<String>,
    pub interval_seconds: u32,
    pub timeout_seconds: u32,
    pub retries: u32,
    pub start_period_seconds: Option<u32>,
}
