mod constraints;
mod refs;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RenderError;
use crate::substitute::{child_path, index_path};
use crate::types::*;

/// Validate a substituted document against the schema for `kind`.
///
/// Violations are pushed onto `errors`; a typed view is returned only when the
/// document produced none.
pub fn resolve(
    kind: DescriptorKind,
    document: &Value,
    errors: &mut Vec<RenderError>,
) -> Option<Descriptor> {
    let before = errors.len();
    let descriptor = match kind {
        DescriptorKind::Service => decode::<RawServiceDescriptor>(document, errors)
            .map(|raw| Descriptor::Service(resolve_service(&raw, errors))),
        DescriptorKind::Task => decode::<RawTaskDescriptor>(document, errors)
            .map(|raw| Descriptor::Task(resolve_task(&raw, errors))),
        DescriptorKind::Fragment => Some(Descriptor::Fragment),
    };

    if errors.len() == before { descriptor } else { None }
}

/// Decode the raw structs. A type mismatch stops typed validation, so it is
/// reported once for the whole document.
fn decode<T: DeserializeOwned>(document: &Value, errors: &mut Vec<RenderError>) -> Option<T> {
    if !document.is_object() {
        errors.push(RenderError::SchemaViolation {
            path: "(root)".to_owned(),
            message: "descriptor must be an object".to_owned(),
        });
        return None;
    }
    match T::deserialize(document) {
        Ok(raw) => Some(raw),
        Err(e) => {
            errors.push(RenderError::SchemaViolation {
                path: "(root)".to_owned(),
                message: e.to_string(),
            });
            None
        }
    }
}

fn resolve_service(raw: &RawServiceDescriptor, errors: &mut Vec<RenderError>) -> ServiceDescriptor {
    let cluster = constraints::require_identifier("cluster", raw.cluster.as_ref(), errors);
    let service_name =
        constraints::require_identifier("serviceName", raw.service_name.as_ref(), errors);
    let task_definition_ref = constraints::require_identifier(
        "taskDefinitionRef",
        raw.task_definition_ref.as_ref(),
        errors,
    );

    let desired_count = constraints::require("desiredCount", raw.desired_count, errors)
        .map(|n| constraints::check_non_negative("desiredCount", n, errors))
        .unwrap_or_default();

    let launch_type = constraints::require("launchType", raw.launch_type.as_deref(), errors)
        .and_then(|s| constraints::check_enum::<LaunchType>("launchType", s, errors))
        .unwrap_or(LaunchType::Fargate);

    let load_balancers = raw
        .load_balancers
        .iter()
        .enumerate()
        .map(|(i, lb)| resolve_load_balancer(&index_path("loadBalancers", i), lb, errors))
        .collect();

    let dc = &raw.deployment_config;
    let deployment_config = DeploymentConfig {
        circuit_breaker_enabled: dc.circuit_breaker_enabled,
        rollback_on_failure: dc.rollback_on_failure,
        max_percent: constraints::check_positive(
            "deploymentConfig.maxPercent",
            dc.max_percent,
            errors,
        ),
        min_healthy_percent: constraints::check_percent(
            "deploymentConfig.minHealthyPercent",
            dc.min_healthy_percent,
            errors,
        ),
    };

    let network = match constraints::require("network", raw.network.as_ref(), errors) {
        Some(n) => resolve_network("network", n, errors),
        None => Network {
            subnet_refs: Vec::new(),
            security_group_refs: Vec::new(),
            assign_public_ip: false,
        },
    };

    let health_check_grace_period_seconds = constraints::check_non_negative(
        "healthCheckGracePeriodSeconds",
        raw.health_check_grace_period_seconds,
        errors,
    );

    for key in raw.tags.keys() {
        constraints::check_identifier(&child_path("tags", key), key, errors);
    }

    ServiceDescriptor {
        cluster,
        service_name,
        task_definition_ref,
        load_balancers,
        desired_count,
        launch_type,
        deployment_config,
        network,
        health_check_grace_period_seconds,
        tags: raw.tags.clone(),
    }
}

fn resolve_load_balancer(
    path: &str,
    raw: &RawLoadBalancer,
    errors: &mut Vec<RenderError>,
) -> LoadBalancer {
    let port_path = child_path(path, "containerPort");
    LoadBalancer {
        target_group_ref: constraints::require_identifier(
            &child_path(path, "targetGroupRef"),
            raw.target_group_ref.as_ref(),
            errors,
        ),
        container_name: constraints::require_identifier(
            &child_path(path, "containerName"),
            raw.container_name.as_ref(),
            errors,
        ),
        container_port: constraints::require(&port_path, raw.container_port, errors)
            .map(|p| constraints::check_port(&port_path, p, errors))
            .unwrap_or_default(),
    }
}

fn resolve_network(path: &str, raw: &RawNetwork, errors: &mut Vec<RenderError>) -> Network {
    let subnets_path = child_path(path, "subnetRefs");
    let subnet_refs =
        constraints::require(&subnets_path, raw.subnet_refs.clone(), errors).unwrap_or_default();
    if raw.subnet_refs.is_some() {
        constraints::check_non_empty(&subnets_path, &subnet_refs, errors);
    }
    check_identifiers(&subnets_path, &subnet_refs, errors);
    refs::check_set(&subnets_path, &subnet_refs, errors);

    let groups_path = child_path(path, "securityGroupRefs");
    check_identifiers(&groups_path, &raw.security_group_refs, errors);
    refs::check_set(&groups_path, &raw.security_group_refs, errors);

    Network {
        subnet_refs,
        security_group_refs: raw.security_group_refs.clone(),
        assign_public_ip: raw.assign_public_ip,
    }
}

fn check_identifiers(path: &str, items: &[String], errors: &mut Vec<RenderError>) {
    for (i, item) in items.iter().enumerate() {
        constraints::check_identifier(&index_path(path, i), item, errors);
    }
}

fn resolve_task(raw: &RawTaskDescriptor, errors: &mut Vec<RenderError>) -> TaskDescriptor {
    let family = constraints::require_identifier("family", raw.family.as_ref(), errors);
    let execution_role_ref = constraints::require_identifier(
        "executionRoleRef",
        raw.execution_role_ref.as_ref(),
        errors,
    );
    if let Some(role) = &raw.task_role_ref {
        constraints::check_identifier("taskRoleRef", role, errors);
    }

    let cpu = constraints::require("cpu", raw.cpu, errors)
        .map(|n| constraints::check_positive("cpu", n, errors))
        .unwrap_or_default();
    let memory = constraints::require("memory", raw.memory, errors)
        .map(|n| constraints::check_positive("memory", n, errors))
        .unwrap_or_default();

    let compat_path = "requiresCompatibilities";
    let compat_raw =
        constraints::require(compat_path, raw.requires_compatibilities.as_ref(), errors);
    let mut requires_compatibilities: Vec<LaunchType> = Vec::new();
    if let Some(compat) = compat_raw {
        constraints::check_non_empty(compat_path, compat, errors);
        refs::check_set(compat_path, compat, errors);
        for (i, s) in compat.iter().enumerate() {
            if let Some(t) =
                constraints::check_enum::<LaunchType>(&index_path(compat_path, i), s, errors)
            {
                requires_compatibilities.push(t);
            }
        }
    }

    let mut containers = Vec::new();
    let raw_containers = constraints::require("containers", raw.containers.as_ref(), errors);
    if let Some(raw_containers) = raw_containers {
        constraints::check_non_empty("containers", raw_containers, errors);
        for (i, c) in raw_containers.iter().enumerate() {
            containers.push(resolve_container(&index_path("containers", i), c, errors));
        }
        refs::check_unique(
            "containers",
            "name",
            "container name",
            raw_containers
                .iter()
                .enumerate()
                .filter_map(|(i, c)| c.name.as_deref().map(|n| (i, n))),
            errors,
        );
    }

    TaskDescriptor {
        family,
        execution_role_ref,
        task_role_ref: raw.task_role_ref.clone(),
        containers,
        cpu,
        memory,
        requires_compatibilities,
    }
}

fn resolve_container(
    path: &str,
    raw: &RawContainerSpec,
    errors: &mut Vec<RenderError>,
) -> ContainerSpec {
    let name =
        constraints::require_identifier(&child_path(path, "name"), raw.name.as_ref(), errors);
    let image =
        constraints::require_identifier(&child_path(path, "image"), raw.image.as_ref(), errors);

    let ports_path = child_path(path, "portMappings");
    let port_mappings = raw
        .port_mappings
        .iter()
        .enumerate()
        .map(|(i, pm)| resolve_port_mapping(&index_path(&ports_path, i), pm, errors))
        .collect();

    let env_path = child_path(path, "environment");
    let mut environment = Vec::new();
    for (i, var) in raw.environment.iter().enumerate() {
        let var_path = index_path(&env_path, i);
        environment.push(EnvVar {
            name: constraints::require_identifier(
                &child_path(&var_path, "name"),
                var.name.as_ref(),
                errors,
            ),
            value: constraints::require(&child_path(&var_path, "value"), var.value.clone(), errors)
                .unwrap_or_default(),
        });
    }
    refs::check_unique(
        &env_path,
        "name",
        "environment variable",
        raw.environment.iter().enumerate().filter_map(|(i, v)| v.name.as_deref().map(|n| (i, n))),
        errors,
    );

    let secrets_path = child_path(path, "secrets");
    let mut secrets = Vec::new();
    for (i, secret) in raw.secrets.iter().enumerate() {
        let secret_path = index_path(&secrets_path, i);
        secrets.push(SecretRef {
            name: constraints::require_identifier(
                &child_path(&secret_path, "name"),
                secret.name.as_ref(),
                errors,
            ),
            secret_ref: constraints::require_identifier(
                &child_path(&secret_path, "secretRef"),
                secret.secret_ref.as_ref(),
                errors,
            ),
        });
    }
    refs::check_unique(
        &secrets_path,
        "name",
        "secret",
        raw.secrets.iter().enumerate().filter_map(|(i, s)| s.name.as_deref().map(|n| (i, n))),
        errors,
    );
    refs::check_env_secret_disjoint(
        path,
        raw.environment.iter().filter_map(|v| v.name.as_deref()),
        raw.secrets.iter().enumerate().filter_map(|(i, s)| s.name.as_deref().map(|n| (i, n))),
        errors,
    );

    let health_check = raw
        .health_check
        .as_ref()
        .map(|hc| resolve_health_check(&child_path(path, "healthCheck"), hc, errors));

    ContainerSpec { name, image, port_mappings, environment, secrets, health_check }
}

fn resolve_port_mapping(
    path: &str,
    raw: &RawPortMapping,
    errors: &mut Vec<RenderError>,
) -> PortMapping {
    let container_path = child_path(path, "containerPort");
    let container_port = constraints::require(&container_path, raw.container_port, errors)
        .map(|p| constraints::check_port(&container_path, p, errors))
        .unwrap_or_default();
    let host_port =
        raw.host_port.map(|p| constraints::check_port(&child_path(path, "hostPort"), p, errors));
    let protocol =
        constraints::check_enum::<Protocol>(&child_path(path, "protocol"), &raw.protocol, errors)
            .unwrap_or_default();

    PortMapping { container_port, host_port, protocol }
}

fn resolve_health_check(
    path: &str,
    raw: &RawHealthCheck,
    errors: &mut Vec<RenderError>,
) -> HealthCheck {
    let command_path = child_path(path, "command");
    let command =
        constraints::require(&command_path, raw.command.clone(), errors).unwrap_or_default();
    if raw.command.is_some() {
        constraints::check_non_empty(&command_path, &command, errors);
    }

    let mut positive = |field: &str, value: Option<i64>| {
        let field_path = child_path(path, field);
        constraints::require(&field_path, value, errors)
            .map(|v| constraints::check_positive(&field_path, v, errors))
            .unwrap_or_default()
    };
    let interval_seconds = positive("intervalSeconds", raw.interval_seconds);
    let timeout_seconds = positive("timeoutSeconds", raw.timeout_seconds);
    let retries = positive("retries", raw.retries);

    let start_period_seconds = raw.start_period_seconds.map(|v| {
        constraints::check_positive(&child_path(path, "startPeriodSeconds"), v, errors)
    });

    HealthCheck { command, interval_seconds, timeout_seconds, retries, start_period_seconds }
}
