//! Copy for the landing page. Markup reads everything from here.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub copy: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hardware {
    pub name: &'static str,
    pub category: &'static str,
    pub blurb: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Social {
    pub label: &'static str,
    pub href: &'static str,
}

pub const COMPANY: &str = "SunEdge IT Solution";
pub const PAGE_TITLE: &str = "SunEdge IT Solution | Futuristic Technology Partner";
pub const PAGE_DESCRIPTION: &str =
    "Premium CRM software, IT project delivery, and hardware infrastructure solutions for modern enterprises.";

pub const HERO_HEADLINE: &str = "Powering the Future of Intelligent Technology";
pub const HERO_SUBLINE: &str = "CRM Software • IT Projects • Hardware Infrastructure";

pub const SERVICES: &[Service] = &[
    Service {
        title: "CRM Software",
        copy: "Custom CRM systems focused on team productivity, automation, and customer lifecycle visibility.",
    },
    Service {
        title: "IT Projects",
        copy: "End-to-end IT execution for modernization, cloud transformation, and secure enterprise operations.",
    },
    Service {
        title: "Hardware Solutions",
        copy: "Reliable infrastructure design, deployment, and support for high-availability business environments.",
    },
    Service {
        title: "Cloud & Networking",
        copy: "Hybrid cloud, network design, and connectivity built to scale with distributed teams.",
    },
    Service {
        title: "Managed Security",
        copy: "Continuous monitoring, hardening, and incident response that keeps critical systems trustworthy.",
    },
];

pub const HARDWARE: &[Hardware] = &[
    Hardware {
        name: "Edge Compute Nodes",
        category: "Compute",
        blurb: "Rack-dense servers tuned for virtualization and low-latency workloads.",
    },
    Hardware {
        name: "Enterprise Storage",
        category: "Storage",
        blurb: "Tiered NVMe and archival arrays with replication across sites.",
    },
    Hardware {
        name: "Core Switching",
        category: "Network",
        blurb: "Redundant fabric switching with segmented, observable traffic.",
    },
    Hardware {
        name: "Wireless Campus",
        category: "Network",
        blurb: "Managed access points with roaming, guest isolation, and site surveys.",
    },
    Hardware {
        name: "Workstations",
        category: "Endpoint",
        blurb: "Provisioned, imaged, and supported fleets for every team.",
    },
    Hardware {
        name: "Power & Cooling",
        category: "Facility",
        blurb: "UPS, PDU, and climate planning that keeps the racks online.",
    },
];

pub const ABOUT_HEADLINE: &str = "Trusted by Visionary Enterprises";
pub const ABOUT_LEAD: &str = "We help organizations move faster with stable systems, clear architecture, and practical digital strategy that teams can actually maintain.";
pub const ABOUT_DETAIL: &str = "From discovery and planning to deployment and long-term support, SunEdge works as a committed technology partner focused on measurable business outcomes.";

pub const METRICS: &[Metric] = &[
    Metric { value: "120+", label: "Enterprise Engagements" },
    Metric { value: "99.98%", label: "Infrastructure Uptime" },
    Metric { value: "24/7", label: "Mission-Critical Support" },
];

pub const CTA_HEADLINE: &str = "Let’s Build the Future Together";
pub const TAGLINE: &str = "Premium Technology. Measurable Impact.";

pub const WHATSAPP_TEXT: &str = "Hello SunEdge IT Solution, I'd like to discuss a project.";

pub const SOCIALS: &[Social] = &[
    Social { label: "LinkedIn", href: "https://www.linkedin.com/" },
    Social { label: "X", href: "https://x.com/" },
    Social { label: "GitHub", href: "https://github.com/" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_services_with_unique_titles() {
        assert_eq!(SERVICES.len(), 5);
        let mut titles: Vec<_> = SERVICES.iter().map(|s| s.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 5);
    }
}
