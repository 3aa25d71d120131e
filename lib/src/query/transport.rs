use strum::Display;
use strum::EnumString;

/// Wire transport used to reach every name server in a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Transport {
    #[default]
    Udp,
    Tcp,
}

impl Transport {
    #[must_use]
    pub fn from_tcp_flag(tcp: bool) -> Self {
        if tcp {
            Self::Tcp
        } else {
            Self::Udp
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("udp", Transport::Udp)]
    #[case("tcp", Transport::Tcp)]
    fn parse_works(#[case] input: &str, #[case] expected: Transport) {
        assert_eq!(Transport::from_str(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("quic")]
    #[case("tls")]
    fn parse_rejects_unknown(#[case] input: &str) {
        assert!(Transport::from_str(input).is_err());
    }

    #[test]
    fn tcp_flag() {
        assert_eq!(Transport::from_tcp_flag(true), Transport::Tcp);
        assert_eq!(Transport::from_tcp_flag(false), Transport::default());
    }
}
