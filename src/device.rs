//! Device classification from user-agent strings
//!
//! Derived, stateless, recomputed per call; nothing here caches. Used to tag
//! exported data and to pick layout hints for small screens.

/// Device category derived from a user-agent string
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

/// Identifiers that mark any handheld device
const MOBILE_MARKERS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

fn matches_any(haystack: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| haystack.contains(marker))
}

/// Classifies a user-agent string as mobile, tablet or desktop.
///
/// Tablets are tested first: the tablet pattern is a subset of the mobile
/// pattern, so a mobile-first check would never report a tablet. An iPad is
/// always a tablet (its user agent carries a `Mobile/...` build token), while
/// Android only counts as one without the phone-sized `mobile` marker. This
/// is coarse fixed-pattern matching, not a full user-agent parser.
///
/// # Examples
///
/// ```
/// use finentry::device::{DeviceClass, classify_user_agent};
///
/// let ipad = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15";
/// assert_eq!(classify_user_agent(ipad), DeviceClass::Tablet);
/// ```
pub fn classify_user_agent(user_agent: &str) -> DeviceClass {
    let ua = user_agent.to_lowercase();

    let tablet = ua.contains("ipad") || (ua.contains("android") && !ua.contains("mobile"));
    if tablet {
        return DeviceClass::Tablet;
    }
    if matches_any(&ua, MOBILE_MARKERS) {
        return DeviceClass::Mobile;
    }
    DeviceClass::Desktop
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPAD_UA: &str =
        "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) \
         Version/16.6 Mobile/15E148 Safari/604.1";
    const IPHONE_UA: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6 like Mac OS X) AppleWebKit/605.1.15 \
         (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";
    const DESKTOP_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
         Chrome/114.0.0.0 Safari/537.36";

    #[test]
    fn test_ipad_is_tablet() {
        assert_eq!(classify_user_agent(IPAD_UA), DeviceClass::Tablet);
    }

    #[test]
    fn test_iphone_is_mobile() {
        assert_eq!(classify_user_agent(IPHONE_UA), DeviceClass::Mobile);
    }

    #[test]
    fn test_desktop() {
        assert_eq!(classify_user_agent(DESKTOP_UA), DeviceClass::Desktop);
        assert_eq!(classify_user_agent(""), DeviceClass::Desktop);
    }

    #[test]
    fn test_android_tablet_has_no_mobile_token() {
        let ua = "Mozilla/5.0 (Linux; Android 13; SM-X710) AppleWebKit/537.36 \
                  (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";
        assert_eq!(classify_user_agent(ua), DeviceClass::Tablet);
    }

    #[test]
    fn test_android_phone_is_mobile() {
        let ua = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 \
                  (KHTML, like Gecko) Chrome/114.0.0.0 Mobile Safari/537.36";
        assert_eq!(classify_user_agent(ua), DeviceClass::Mobile);
    }

    #[test]
    fn test_ipod_is_mobile() {
        let ua = "Mozilla/5.0 (iPod touch; CPU iPhone OS 15_0 like Mac OS X)";
        assert_eq!(classify_user_agent(ua), DeviceClass::Mobile);
    }

    #[test]
    fn test_blackberry_is_mobile() {
        let ua = "Mozilla/5.0 (BlackBerry; U; BlackBerry 9900; en) AppleWebKit/534.11+";
        assert_eq!(classify_user_agent(ua), DeviceClass::Mobile);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_user_agent("IPAD"), DeviceClass::Tablet);
        assert_eq!(classify_user_agent("IPHONE"), DeviceClass::Mobile);
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(DeviceClass::Tablet.to_string(), "tablet");
        assert_eq!(DeviceClass::Mobile.to_string(), "mobile");
        assert_eq!(DeviceClass::Desktop.to_string(), "desktop");
    }
}
