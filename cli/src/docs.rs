//! Static content tables for the about view.
//!
//! Pure configuration data: the list of checks the hosted results view can
//! run against a classified address, plus the legal blurb.

pub struct Doc {
    pub title: &'static str,
    pub description: &'static str,
}

pub const DOCS: &[Doc] = &[
    Doc {
        title: "IP Info",
        description: "Resolved IP address of the target, with provider details",
    },
    Doc {
        title: "SSL Chain",
        description: "Certificate chain, issuer, expiry and cipher info",
    },
    Doc {
        title: "DNS Records",
        description: "A, AAAA, MX, NS, TXT and CNAME records",
    },
    Doc {
        title: "Headers",
        description: "HTTP response headers as returned by the server",
    },
    Doc {
        title: "Cookies",
        description: "Cookies set by the page, with flags and expiry",
    },
    Doc {
        title: "Crawl Rules",
        description: "Rules the site publishes in robots.txt",
    },
    Doc {
        title: "Server Location",
        description: "Approximate geographic location of the host",
    },
    Doc {
        title: "Redirect Chain",
        description: "Every hop followed before the final response",
    },
    Doc {
        title: "Open Ports",
        description: "Commonly used ports that accept connections",
    },
    Doc {
        title: "Whois Lookup",
        description: "Registrar plus registration and expiry dates",
    },
    Doc {
        title: "DNSSEC",
        description: "Presence and validity of DNSSEC records",
    },
    Doc {
        title: "Server Status",
        description: "Whether the server is currently up",
    },
    Doc {
        title: "Traceroute",
        description: "Network path between here and the target",
    },
    Doc {
        title: "Site Features",
        description: "Technologies detected on the page",
    },
];

pub const ABOUT: &[&str] = &[
    "webcheck classifies whatever you type into an IPv4, IPv6 or URL target and routes it to the matching analysis view.",
    "Classification is purely syntactic and runs locally: nothing is resolved, probed or fetched to decide what an input is.",
];

pub const LICENSE_SUMMARY: &[&str] = &[
    "Licensed under MIT.",
    "Use, copy, modify and distribute freely, subject to the license conditions.",
];
