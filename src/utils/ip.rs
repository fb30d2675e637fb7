//! IP 地址处理工具
//!
//! 客户端 IP 提取：只有来自可信代理的连接才使用 X-Forwarded-For。

use std::net::{IpAddr, SocketAddr};

use actix_web::dev::ConnectionInfo;
use tracing::debug;

/// 检查 IP 是否在可信代理列表中（单 IP 或 CIDR）
pub fn is_trusted_proxy(ip: &str, trusted_proxies: &[String]) -> bool {
    // 支持 ip:port
    let ip_addr = if let Ok(socket_addr) = ip.parse::<SocketAddr>() {
        socket_addr.ip()
    } else if let Ok(ip_addr) = ip.parse::<IpAddr>() {
        ip_addr
    } else {
        return false;
    };

    trusted_proxies.iter().any(|proxy| {
        if proxy.contains('/') {
            ip_in_cidr(&ip_addr, proxy)
        } else {
            proxy.parse::<IpAddr>().is_ok_and(|p| p == ip_addr)
        }
    })
}

/// CIDR 检查
pub fn ip_in_cidr(ip: &IpAddr, cidr: &str) -> bool {
    let Some((network, prefix_len)) = cidr.split_once('/') else {
        return false;
    };

    let Ok(prefix_len): Result<u8, _> = prefix_len.parse() else {
        return false;
    };

    let Ok(network_addr) = network.parse::<IpAddr>() else {
        return false;
    };

    match (ip, network_addr) {
        (IpAddr::V4(ip), IpAddr::V4(net)) => {
            if prefix_len > 32 {
                return false;
            }
            let mask = u32::MAX.checked_shl(32 - prefix_len as u32).unwrap_or(0);
            let ip_bits = u32::from_be_bytes(ip.octets());
            let net_bits = u32::from_be_bytes(net.octets());
            (ip_bits & mask) == (net_bits & mask)
        }
        (IpAddr::V6(ip), IpAddr::V6(net)) => {
            if prefix_len > 128 {
                return false;
            }
            let mask = u128::MAX.checked_shl(128 - prefix_len as u32).unwrap_or(0);
            let ip_bits = u128::from_be_bytes(ip.octets());
            let net_bits = u128::from_be_bytes(net.octets());
            (ip_bits & mask) == (net_bits & mask)
        }
        _ => false,
    }
}

/// Client address used as the rate-limit key.
///
/// The TCP peer address, unless the peer is a trusted proxy, in which case
/// the first `X-Forwarded-For` / `Forwarded` entry is used.
pub fn client_ip(conn_info: &ConnectionInfo, trusted_proxies: &[String]) -> Option<String> {
    let peer_ip = conn_info.peer_addr()?;

    if !trusted_proxies.is_empty() && is_trusted_proxy(peer_ip, trusted_proxies) {
        let real_ip = conn_info.realip_remote_addr().unwrap_or(peer_ip);
        debug!("Trusted proxy {} -> client {}", peer_ip, real_ip);
        return Some(real_ip.to_string());
    }

    Some(peer_ip.to_string())
}
