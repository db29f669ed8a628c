
use _fixtures::{five_pair_tree, synthetic_pairs};
use pair_merkle::MerkleTree;

#[test]
fn five_pair_render_snapshot() {
    insta::assert_snapshot!(five_pair_tree().render(), @r"
8) 0x5c75cf6b59f21f48bf650c0e41625e80b6ecbd38565dc5898047ca5cd158e612
├─ 6) 0x00bd8effe21bea36fe20ae3725decd451f4394f588bd57faf8546e690bf029e3
│  ├─ 2) 0x72a74298e1f894cca9ed2090c3636b8afcc88311f2e643ff74657b023c0addbb
│  └─ 3) 0xbe385363aaa18ffbe3781aeeebd20e7426bb0d619b1e45ce1abc800bb8ed40bf
└─ 7) 0x459d7b32d7f66daac291ec39d72fc938739486b3af6087ec075eee2532db39f7
   ├─ 4) 0xa60c5e678be668a325aa4020dbb888ec554c30effbe9fee3a04a2cbd886d4d6d
   └─ 5) 0xf96c963a5e248eb6208b05a69046b7e150affdc57561c1c4de6f7d44cc4ffe34
      ├─ 0) 0x9104dda3944cefe37b8192b14eb6b242c03379e064ddba755801f80f02a317ef
      └─ 1) 0x64614787131113eddb9237144bbde591fb35beb39aad590bf170752f88f284d0
");
}

#[test]
fn leaves_render_at_their_depth() {
    let tree = MerkleTree::of(synthetic_pairs(13)).unwrap();
    let rendered = tree.render();
    for index in 0..tree.len() {
        let line = rendered
            .lines()
            .find(|line| line.contains(&format!(" {index}) ")) || line.starts_with(&format!("{index}) ")))
            .unwrap();
        let prefix_chars = line.chars().take_while(|c| !c.is_ascii_digit()).count();
        assert_eq!(prefix_chars, 3 * tree.layout().depth(index), "leaf {index}");
    }
}
