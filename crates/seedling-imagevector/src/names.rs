//! Component names of the built-in catalog.

/// Resource manager deployed into every seed and shoot control plane.
pub const GARDENER_RESOURCE_MANAGER: &str = "gardener-resource-manager";
/// Infrastructure container of every pod.
pub const PAUSE_CONTAINER: &str = "pause-container";
/// Etcd operator.
pub const ETCD_DRUID: &str = "etcd-druid";
/// Etcd.
pub const ETCD: &str = "etcd";
/// Kubernetes API server.
pub const KUBE_APISERVER: &str = "kube-apiserver";
/// Kubernetes controller manager.
pub const KUBE_CONTROLLER_MANAGER: &str = "kube-controller-manager";
/// Kubernetes scheduler.
pub const KUBE_SCHEDULER: &str = "kube-scheduler";
/// Kubernetes service proxy.
pub const KUBE_PROXY: &str = "kube-proxy";
/// Node autoscaler, one entry per supported target minor version.
pub const CLUSTER_AUTOSCALER: &str = "cluster-autoscaler";
/// Cluster DNS.
pub const COREDNS: &str = "coredns";
/// Seed side of the control plane VPN.
pub const VPN_SEED_SERVER: &str = "vpn-seed-server";
/// Shoot side of the control plane VPN.
pub const VPN_SHOOT_CLIENT: &str = "vpn-shoot-client";
/// Iptables helper, published for selected architectures only.
pub const ALPINE_IPTABLES: &str = "alpine-iptables";
/// Seed ingress controller, selected by seed version.
pub const NGINX_INGRESS_CONTROLLER_SEED: &str = "nginx-ingress-controller-seed";

/// Every component name of the built-in catalog.
pub const ALL: &[&str] = &[
    GARDENER_RESOURCE_MANAGER,
    PAUSE_CONTAINER,
    ETCD_DRUID,
    ETCD,
    KUBE_APISERVER,
    KUBE_CONTROLLER_MANAGER,
    KUBE_SCHEDULER,
    KUBE_PROXY,
    CLUSTER_AUTOSCALER,
    COREDNS,
    VPN_SEED_SERVER,
    VPN_SHOOT_CLIENT,
    ALPINE_IPTABLES,
    NGINX_INGRESS_CONTROLLER_SEED,
];
