//! 测试辅助模块
//! BIP32 测试向量与由独立实现算出的期望地址

#![allow(dead_code)]

/// BIP32 测试向量 1 主公钥 (m)
pub const TV1_XPUB: &str = "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8";

/// BIP32 测试向量 2 主公钥 (m)
pub const TV2_XPUB: &str = "xpub661MyMwAqRbcFW31YEwpkMuc5THy2PSt5bDMsktWQcFF8syAmRUapSCGu8ED9W6oDMSgv6Zz8idoc4a6mr8BDzTJY47LJhkJ8UB7WEGuduB";

/// 一条路径在各网络下的期望结果
pub struct Fixture {
    pub xpub: &'static str,
    pub path: &'static str,
    pub child_xpub: Option<&'static str>,
    /// (网络标识符, 期望地址)
    pub addresses: &'static [(&'static str, &'static str)],
}

pub const FIXTURES: &[Fixture] = &[
    Fixture {
        xpub: TV1_XPUB,
        path: "",
        child_xpub: Some(TV1_XPUB),
        addresses: &[
            ("bitcoin", "15mKKb2eos1hWa6tisdPwwDC1a5J1y9nma"),
            ("litecoin", "LPzGaoLUtXFkmNo3u1chDxGxDnSaBQTTxm"),
            ("bitcoin_bech32", "bc1qx3ppj0smkuy3d6g525sh9n2w9k7fm7q3x30rtg"),
            ("bitcoin_cash", "bitcoincash:qq6yyxf7rwmsj9hfz32jzukdfckme80czyn2pwwpfn"),
            ("ripple", "rnmKKbpeo1r6W2at51dPAADUr2nJry98m2"),
            ("ethereum", "0x056DB290F8Ba3250ca64a45D16284D04Bc6f5FBf"),
        ],
    },
    Fixture {
        xpub: TV1_XPUB,
        path: "0",
        child_xpub: Some("xpub68Gmy5EVb2BdFbj2LpWrk1M7obNuaPTpT5oh9QCCo5sRfqSHVYWex97WpDZzszdzHzxXDAzPLVSwybe4uPYkSk4G3gnrPqqkV9RyNzAcNJ1"),
        addresses: &[
            ("BTC", "1FHz8bpEE5qUZ9XhfjzAbCCwo5bT1HMNAc"),
            ("LTC", "LZWwPp84Jk5XoxDrqsyTsDGi1HxjB4ALZN"),
            ("BTC-bech32", "bc1qnnypkcfrvu3e9dhzeggpn4kh622l4cq7c5sghz"),
            ("BCH", "bitcoincash:qzwvsxmpydnj8y4kut9pqxwk6lfft7hqrcvu0mw4a4"),
            ("XRP", "rEHz3bFNNnq7Z9X6CjzwbUUAonbTrHM4wc"),
            ("ETH", "0xAEfbb50942817d8270Bb9bD922aA5ca9cb06cDBf"),
        ],
    },
    Fixture {
        xpub: TV1_XPUB,
        path: "1",
        child_xpub: Some("xpub68Gmy5EVb2BdHTYHpekwGdcbBWax19w9HwA2DaADYvuCSSgt4YAErxxSN1KWSnmyqkwRNbnTj3XiUBKmHeC8rTjLRPjSULcDKQQgfgJDppq"),
        addresses: &[
            ("bitcoin", "1J8QDN1u7iDMbJktbqXPSrAqruNjkmRFmT"),
            ("bitcoin_bech32", "bc1qh0sx66h4z333j2wf4639unyyvkh0cunqwg6547"),
            ("bitcoin_cash", "bitcoincash:qza7qmt2752xxxffexh2yhjvs3j6alrjvqe7h9x06h"),
            ("ripple", "rJ3QD4ruf5DMbJktbqXPSiwqiu4jkmREmT"),
            ("ethereum", "0x84f549a5bE894F8faeB744952d2669FB55366798"),
        ],
    },
    Fixture {
        xpub: TV1_XPUB,
        path: "m/0/1",
        child_xpub: Some("xpub6AvUGrnEpfvJBbfx7sQ89Q8hEMPM65UteqEX4yUbUiES2jHfjexmfJoxCGSwFMZiPBaKQT1RiKWrKfuDV4vpgVs4Xn8PpPTR2i79rwHd4Zr"),
        addresses: &[
            ("bitcoin", "13Q3u97PKtyERBpXg31MLoJbQsECgJiMMw"),
            ("litecoin", "LMd1AMRDQZDHfzWgrAzecpNMd5bUoD5fyv"),
            ("bitcoin_bech32", "bc1qrfxr69jqnhwufxgkqgcdep9prq4j4vuw2wyg0v"),
            ("bitcoin_cash", "bitcoincash:qqdyc0gkgzwam3yezcprphyy5yvzk24n3cm835tnv6"),
            ("ripple", "rsQsu9fPKtyNRBFXgsrMLoJbQ1NUgJ5MMA"),
            ("ethereum", "0xEb5A8aE75e395Ef05c96839a3FB088B2f65E7662"),
        ],
    },
    Fixture {
        xpub: TV1_XPUB,
        path: "5.7",
        child_xpub: Some("xpub6ASF23jEdCDXdMvXUb4zgKBZpNr5wXywwpZKY4tVqUrY2FxY5o4cSnQTbMrYKSbuphg2BH6GZXLxg7eZNn5QR68PFNjxkNbTY5miDVV4TME"),
        addresses: &[("bitcoin", "19VSS7Y5wSwUtLofv9kpAVmL3DpBST4Sv")],
    },
    Fixture {
        xpub: TV2_XPUB,
        path: "m",
        child_xpub: Some(TV2_XPUB),
        addresses: &[("bitcoin", "1JEoxevbLLG8cVqeoGKQiAwoWbNYSUyYjg")],
    },
    Fixture {
        xpub: TV2_XPUB,
        path: "0",
        child_xpub: Some("xpub69H7F5d8KSRgmmdJg2KhpAK8SR3DjMwAdkxj3ZuxV27CprR9LgpeyGmXUbC6wb7ERfvrnKZjXoUmmDznezpbZb7ap6r1D3tgFxHmwMkQTPH"),
        addresses: &[
            ("bitcoin", "19EuDJdgfRkwCmRzbzVBHZWQG9QNWhftbZ"),
            ("litecoin", "LTTrUWwWk5zzTa89n8UUZaaAUMmefUgMvV"),
            ("bitcoin_bech32", "bc1qtfsllr4h4t9rqyxmjl4a5asjzcgt0qykp3q3we"),
            ("bitcoin_cash", "bitcoincash:qpdxrluwk74v5vqsmwt7hknkzgtppduqjc4fa6rpuy"),
            ("ripple", "r9NuDJdgCRkAUmRzbzVBHZWQG9Q4W6CtbZ"),
            ("ethereum", "0xaBBcd4471a0b6E76A2f6fdc44008fE53831E208e"),
        ],
    },
    Fixture {
        xpub: TV2_XPUB,
        path: "0/1",
        child_xpub: None,
        addresses: &[("bitcoin", "1NK8BtPi1AkfCwa4uuCb8fEtyYUg4NFC93")],
    },
];

/// 压缩公钥前缀为 0x04（33 字节位置放不下未压缩点）
pub const XPUB_PREFIX_04: &str = "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ45ycVBsADt89FVXeDkYqbSeZmpjjnJETkyyiMwXokWPisrtUjm";

/// 压缩公钥前缀为 0x05
pub const XPUB_PREFIX_05: &str = "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ62inidu1eZMH55EYoNYnv3RUtSTPV97FQ45xWdRoQWnDT7Czxc";

/// x = 5 不在曲线上
pub const XPUB_NON_RESIDUE: &str = "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gYym6yCVZtiQKSpLUqpuy2xafsZZR8vydJmD1kZ1yXu2LotCeeYJ";

/// 77 字节载荷
pub const XPUB_SHORT_PAYLOAD: &str = "Deb7pNXSbX7qSvc2eMjkNYTrggh4pBgYa2QMFjEjj6hUy1i6QK7Zm1qdZkHEwqHpT7WeE6V55dTU8PuuzPAiP8JDwAcsuN3v858r83c7mPeYLX";

/// TV1 最后一个字符被改动
pub fn xpub_bad_checksum() -> String {
    let mut s = TV1_XPUB.to_string();
    s.pop();
    s.push('9');
    s
}
