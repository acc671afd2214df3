//! IPv4 classification record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Legacy classful network class.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ipv4Class {
    A,
    B,
    C,
    D,
    E,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Ipv4AddressType {
    Public,
    Private,
    Loopback,
    LinkLocal,
    Multicast,
    Experimental,
    Other,
}

/// Classification of a single IPv4 address.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ipv4AddressMeta {
    pub ipv4_class: Ipv4Class,
    pub address_type: Ipv4AddressType,
    pub is_private: bool,
}

impl fmt::Display for Ipv4Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Ipv4Class::A => "A",
            Ipv4Class::B => "B",
            Ipv4Class::C => "C",
            Ipv4Class::D => "D",
            Ipv4Class::E => "E",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for Ipv4AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Ipv4AddressType::Public => "public",
            Ipv4AddressType::Private => "private",
            Ipv4AddressType::Loopback => "loopback",
            Ipv4AddressType::LinkLocal => "linkLocal",
            Ipv4AddressType::Multicast => "multicast",
            Ipv4AddressType::Experimental => "experimental",
            Ipv4AddressType::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// An IPv4 address given either as text or as its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ipv4Input<'a> {
    Text(&'a str),
    Value(u32),
}

impl<'a> From<&'a str> for Ipv4Input<'a> {
    fn from(s: &'a str) -> Self {
        Ipv4Input::Text(s)
    }
}

impl<'a> From<&'a String> for Ipv4Input<'a> {
    fn from(s: &'a String) -> Self {
        Ipv4Input::Text(s)
    }
}

impl From<u32> for Ipv4Input<'_> {
    fn from(value: u32) -> Self {
        Ipv4Input::Value(value)
    }
}

impl From<std::net::Ipv4Addr> for Ipv4Input<'_> {
    fn from(addr: std::net::Ipv4Addr) -> Self {
        Ipv4Input::Value(u32::from(addr))
    }
}
