//! Node and link definitions.
//!
//! Elements live in a caller-owned arena (`&[N]` / `&mut [N]`). Each element
//! embeds a [`Link`] and exposes it through [`Node`]; every "pointer" is an
//! `Option<u32>` index into that arena.

/// Node colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Red,
    Black,
}

/// Intrusive tree links embedded in every element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Link {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub color: Color,
}

impl Link {
    pub const fn new() -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            color: Color::Red,
        }
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    /// `true` when the link carries no parent or children.
    pub fn is_detached(&self) -> bool {
        self.p.is_none() && self.l.is_none() && self.r.is_none()
    }
}

/// An element that can be threaded into a tree.
pub trait Node {
    fn link(&self) -> &Link;
    fn link_mut(&mut self) -> &mut Link;

    fn p(&self) -> Option<u32> {
        self.link().p
    }

    fn l(&self) -> Option<u32> {
        self.link().l
    }

    fn r(&self) -> Option<u32> {
        self.link().r
    }

    fn color(&self) -> Color {
        self.link().color
    }

    fn is_black(&self) -> bool {
        self.link().is_black()
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.link_mut().p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.link_mut().l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.link_mut().r = v;
    }

    fn set_color(&mut self, color: Color) {
        self.link_mut().color = color;
    }
}

impl Node for Link {
    fn link(&self) -> &Link {
        self
    }

    fn link_mut(&mut self) -> &mut Link {
        self
    }
}

/// Ready-made key/value element.
#[derive(Clone, Debug)]
pub struct RbNode<K, V> {
    pub link: Link,
    pub k: K,
    pub v: V,
}

impl<K, V> RbNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            link: Link::new(),
            k,
            v,
        }
    }
}

impl<K, V> Node for RbNode<K, V> {
    fn link(&self) -> &Link {
        &self.link
    }

    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }
}
