mod kind;
mod raw;
mod resolved;

pub use kind::{DescriptorKind, Format, LaunchType, Protocol};
pub use raw::{
    RawContainerSpec, RawDeploymentConfig, RawEnvVar, RawHealthCheck, RawLoadBalancer,
    RawNetwork, RawPortMapping, RawSecretRef, RawServiceDescriptor, RawTaskDescriptor,
    default_max_percent, default_min_healthy_percent,
};
pub use resolved::{
    ContainerSpec, DeploymentConfig, Descriptor, EnvVar, HealthCheck, LoadBalancer, Network,
    PortMapping, ResolvedDescriptor, SecretRef, ServiceDescriptor, TaskDescriptor,
};
