// crates/nacre-distribution/src/addresses.rs
//
// The canonical mainnet distribution table.
//
// Table order is part of the ledger contract: the first
// INITIAL_UNLOCKED_COUNT entries are the genesis-unlocked addresses, and
// the manual unlock schedule will release the remainder in this order.
// Entries must be pairwise distinct; `Distribution::new` rejects the table
// otherwise.

use crate::supply::DISTRIBUTION_ADDRESSES_TOTAL;

pub(crate) const MAINNET_DISTRIBUTION_ADDRESSES: [&str; DISTRIBUTION_ADDRESSES_TOTAL as usize] = [
    "9qZPcewnkLEfgKQ27ziYGuJkP4p3WDuQqV",
    "2MnbJ1amVWrNmmonTXH9xwwL6R9Mmg8AGub",
    "2RQwg9xFgmW3tfrkBQNf2zqubSWCarNtAdH",
    "2dtFuTTy3JBeAnQPRNomSmp3Egmts2Q5bGm",
    "uLnUhgt6kS3B7jVw6HGS4wWDwccjBpv3zN",
    "2GzFyQXFokPayyz1f4ex2qs4FLfn27CK9Hk",
    "NqMTTv2XuDPdbpJNe7idaAfH7Tw2xa9NCR",
    "MriQWGCvSyoj6C7BeW7szEaLnfurttokmx",
    "iP4qJhANFFbKrNk3rCvZYRv4nQnXJyzw6Z",
    "VX228kwbdrEkWrhhU5cjCqj3tLaoVpEVWQ",
    "wpRhQjsxHudPjecVdTW4U2TvuoA3ChwQTa",
    "2GxfnXDhjjibM7CaJAgfixc2C1WegATfEeR",
    "2LhusDfa5A73uDiquePEfXEjwePJz4f8cfB",
    "2EhTYfb2vVb4gKXRz8Vy1y2NsRS288wBw2B",
    "2jDr3L5mzBdHWwozjbkaHBZGqm7DXaVhEni",
    "26MxWZ1iqt61YvxRrHytdfsY34xz9pLj2Az",
    "2CrzTJtM19dXXJWJq4zTVRvde1kgrX2pTwW",
    "2ZE9K5qvrXBf1ACDFwMM9vr9ueLiZM8ysrX",
    "RU4i5wUsv8ANXoBJC2eDuuvejWu8rvjtCH",
    "W3uP5iEpZq1bJxNBKmZMikdL7c156LCiob",
    "2e5Dehcc8BMUeCjBXvZUvk64VZFVAzLFiF3",
    "QDMfJbNxpDqka5oKjFke6ccCUQCbHQmCcB",
    "2bxcLQYgjV14zhDw75XmumPFChafa7pGBUy",
    "25MX9z1cujYS1464WrEJkGuEv4fqcorJPsJ",
    "2NWBFzpSE17ufinPhVMy6odS7Zd8VdmNn3T",
    "2DHRn7xU4CeqC7mkscwzmgdnf3y8CL88oE7",
    "2T32LD9V4WgZuaznBHH1ediGMdmxbry8Hxi",
    "2SZm9QkwcSdacsNahsN6vdaDtbrLob4DGef",
    "9334AZxPmiKDmEzQKEgiiv1M4SSLF2Ahe2",
    "5RACpDUqnt1NmZUQ429oA74zXEbuMk4hn8",
    "YmYTKqP7zBS5VxwL5o4Sb1j8RcokZPzj8Y",
    "2ACe1p9pAfjd8mXTPq7Y4yiFtoPf3tbq9JW",
    "25MBxA8v1LmHKKCseBqya3CDo6eE3Uz25xd",
    "2KvjGdxgXMBQp9mtQF8b9QXzUTAXdykatvH",
    "2TWc2gHD9BmyMpRgRoGcQxoV4TxyHrzQKAs",
    "xnaoepH679XJyLUFUW1Wp4rqkYtV8CvTeB",
    "2GVSieJWtuBdnpk4pvQ5k7aZrTuTW8kFMVy",
    "JBMeu8B8XEDupAV7Sp5LHXCoVG1bVzrhps",
    "kpxTvDVehgxkm2ZDegpw6QGChiGCq5LuzA",
    "29WeiS2nRiZbtbwYZrwZXNL2N4oxDW6HKQF",
    "2N187MvsYKEes4Qf83nWK6h5bQNFGZvrsKG",
    "YRi6qm7EQsPuMLndtY3XXodD11No1HBN7q",
    "vLvmjCuLFbKYifHfq2UKCXDyC4kzHhU7da",
    "7H2TVj3ReJRfBXrXLQ5GcDtYWwZxbTnxSy",
    "7LBzZY8q8oHKpvcRrhmaCnTH6kzK8NiPFZ",
    "2aQJXM4VejBUh3PEe6NmQXek5ESbJ7t2324",
    "273ytDnnWco6Daubfib7oWhR76e5ucLuKfy",
    "Ykcyy2X7M6Nh1snTRsntjLyucijDDtYTRR",
    "9f4pqQt2WdHJPnvt1XyTaJjFYnH99duFHs",
    "DW9YoM7Ji1vUW9QeogYQWmtguB5qmmUCuo",
    "2BkfMoXxPWkJMCZCf8KJikrMKwYq7YBGmmt",
    "4DX7znTsjndLgfCvdNgsibwgzMJK1fwgzS",
    "rNKVDHCWfcb4BKKf9QhqnWDbVJkq3A2qW7",
    "2jYKwSLkhqkE7KnDYeKkX67VsadtxHKqJt7",
    "9pzbzY6E1ENHggztxhrtcYnWQggKzDnj45",
    "dsnAysTBYejVa4tpY8Y5xqr4iEJY6tTzRS",
    "8ad7HLaoT2Sm4EuwYUfS67YR7xrz2GUmuw",
    "FMQdm9MbP3KBEx2ioxDW2D6zNNWBAStT72",
    "2ehgPRpYN37PeRFxRFfq3GJPD2c6NCGNpMn",
    "ddVvHsQY6qgwpdfoMb3kj8MKSMfe6tq72S",
    "dTHuy4jgso9vftyUZHCj2dDktM7aVVxSVA",
    "QCwzdCQtpdTiUywkX1obzUPgcpGRLU1Jd4",
    "fyFgBFiNeJ82z3s4LUzMaRNh2PM1rfLhqW",
    "2AZvwBwVaRe88DeNvnc8gNY59Ln8jVNBcfK",
    "WEQuP35srBsTaVNjBByjLmqoyvGezK2dfK",
    "M1mA4CzD9sZUjm3Nm7Cdv1tdKWAMTiP8wz",
    "4gLz96KVoj3oMCBvCAPD1K8eoCwF2nZ1oZ",
    "2EsXtSdXxnAwt7sH4jyLDmxrLHjy1H71Gxr",
    "2YUo1CajXcUsxcDswmVwbHfH9v4gwrf6Mfa",
    "Kic1GKTGmaWgDcDGCmwozWfiZLYfqYjA2h",
    "2ZRRtDiwL7mzwoEaV5Aj3i5VjVLKKu5GgUf",
    "gxuMUu2U1N9d3mjX2xmVCR3z8CDncM14vQ",
    "i3aopHVY9XrBRb9Lm8irMWHewJLiAvA4pk",
    "2TwREkrwVNnzisLg6DjfQEQF4aq1SSPi9iQ",
    "2V7nQUMYK2jYGgDf1qoBAjUtrggM7iqBLvy",
    "9XCxPbX84vNTg6Hy8fLLY86MNpKJia5B1C",
    "1DGPNWNB6yFVZdY7r7anwayAA1uC9bH3nh",
    "o8hAWrACXzoJCAwiEhjjeTT7KyD6dAva9h",
    "CZn6BZrHUqHJS9qrYh29Uc4f8H75F3sLqv",
    "2cr4RC6BeA7TnmDt6wLkLKqQ7fmVGMEar74",
    "2etVMUjj7bwLyCEvFWYwAaVnv23QfUft43y",
    "VX3CU5R9eVC4HUiiTJtV4WnGJEcfAQsXTJ",
    "mJVar1hFgCgTDoNWRqUetTL7LkcfjmJq6Z",
    "kBiqu9ne85eU7sjN9orBV3aXeVfwwx3NPT",
    "CuXjbASdbfpUndLbuR7jamVLA75U9UVV96",
    "2YYNFFJc1ozS6GsEiGMyvxAjUimmNR7mC84",
    "tj3KF6q47Nd9FxJM362hizr5j1k7fnHVkE",
    "2fHeRKBvgxMSBUxjRV64189eewVjVDriQf2",
    "4jnEyYEs96f7vPcjHNtYjmXTP9rKPgvpjG",
    "2V3yYBM2pwPbwqRM6sGRChdAyih1tMgN7LV",
    "huXATMPHuMjA13KW5iGyg7M1afn5kRGXGe",
    "UPC891jqAKFgRyGpasQo4J4taPE3dBuYch",
    "5DWHtia4eJynLHqh2A9WKyUYn8vtAdBXmF",
    "ERv1it2LGpi2BBgEXubFMRYCFeSbxdaG2c",
    "81p4jYH7e2kT4WDu5EKiHSYRpEX9RQuquw",
    "aDGfFYpyZviW3xWF4xRabq4TXGZ13T7LFi",
    "W5jLmYiAT3XeXs9HQNsugqumGf9nKabCai",
    "2Vi6cRYvqrRiCdUiQ6DgH4rERamfLFKeRXU",
    "sEJUXSKs1D1i1q4h7pxQ1EtsiPQQXog2Xa",
    "2kdtisEC5iazCX2JEwMoHqW5QGeKYcmryXo",
];
