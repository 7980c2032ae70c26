use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw deserialized service descriptor. Required fields are optional here and
/// numbers are wide so that the validator can report every problem at once.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawServiceDescriptor {
    pub cluster: Option<String>,
    pub service_name: Option<String>,
    pub task_definition_ref: Option<String>,
    #[serde(default)]
    pub load_balancers: Vec<RawLoadBalancer>,
    pub desired_count: Option<i64>,
    pub launch_type: Option<String>,
    #[serde(default)]
    pub deployment_config: RawDeploymentConfig,
    pub network: Option<RawNetwork>,
    #[serde(default)]
    pub health_check_grace_period_seconds: i64,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawLoadBalancer {
    pub target_group_ref: Option<String>,
    pub container_name: Option<String>,
    pub container_port: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawDeploymentConfig {
    #[serde(default)]
    pub circuit_breaker_enabled: bool,
    #[serde(default)]
    pub rollback_on_failure: bool,
    #[serde(default = "default_max_percent")]
    pub max_percent: i64,
    #[serde(default = "default_min_healthy_percent")]
    pub min_healthy_percent: i64,
}

impl Default for RawDeploymentConfig {
    fn default() -> Self {
        RawDeploymentConfig {
            circuit_breaker_enabled: false,
            rollback_on_failure: false,
            max_percent: default_max_percent(),
            min_healthy_percent: default_min_healthy_percent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawNetwork {
    pub subnet_refs: Option<Vec<String>>,
    #[serde(default)]
    pub security_group_refs: Vec<String>,
    #[serde(default)]
    pub assign_public_ip: bool,
}

/// Raw deserialized task descriptor.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawTaskDescriptor {
    pub family: Option<String>,
    pub execution_role_ref: Option<String>,
    pub task_role_ref: Option<String>,
    pub containers: Option<Vec<RawContainerSpec>>,
    pub cpu: Option<i64>,
    pub memory: Option<i64>,
    pub requires_compatibilities: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawContainerSpec {
    pub name: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub port_mappings: Vec<RawPortMapping>,
    #[serde(default)]
    pub environment: Vec<RawEnvVar>,
    #[serde(default)]
    pub secrets: Vec<RawSecretRef>,
    pub health_check: Option<RawHealthCheck>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawPortMapping {
    pub container_port: Option<i64>,
    pub host_port: Option<i64>,
    #[serde(default = "default_protocol")]
    pub protocol: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawEnvVar {
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawSecretRef {
    pub name: Option<String>,
    pub secret_ref: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawHealthCheck {
    pub command: Option<Vec<String>>,
    pub interval_seconds: Option<i64>,
    pub timeout_seconds: Option<i64>,
    pub retries: Option<i64>,
    pub start_period_seconds: Option<i64>,
}

pub fn default_max_percent() -> i64 {
    200
}

pub fn default_min_healthy_percent() -> i64 {
    100
}

fn default_protocol() -> String {
    "tcp".to_owned()
}
