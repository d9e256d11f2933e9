//! Presentation and behavior assets for structured output
//!
//! Numbering of ordered lists is purely visual: the stylesheet drives it with CSS counters, so
//! no numeral text is written into the items. The script makes every item collapsible.

/// Stylesheet injected once before the first line of a document with numbered lists.
pub const STYLESHEET: &str = r#"<style>
ol.wit-nest {
  counter-reset: item
}
ol.wit-nest > li.wit-item {
  display: block
}
ol.wit-nest > li.wit-item:before {
  content: counters(item, ".") ". ";
  counter-increment: item
}
li.wit-item > p {
  display: inline
}
li.wit-item {
  cursor: pointer
}
li.wit-item.wit-collapsed > p:after {
  content: " \2026"
}
.wit-hidden {
  display: none
}
</style>"#;

const SCRIPT_TEMPLATE: &str = r#"<script>
(function () {
  var collapseAll = __COLLAPSE_ALL__;
  function toggle(item) {
    item.classList.toggle("wit-collapsed");
    var id = item.getAttribute("data-wit-content");
    document.querySelectorAll('[data-wit-for="' + id + '"]').forEach(function (block) {
      block.classList.toggle("wit-hidden");
    });
  }
  document.querySelectorAll("li.wit-item").forEach(function (item) {
    item.addEventListener("click", function (event) {
      event.stopPropagation();
      if (event.target.closest("a")) {
        return;
      }
      toggle(item);
    });
    if (collapseAll) {
      toggle(item);
    }
  });
})();
</script>"#;

/// Behavior script appended once after all content.
///
/// With `collapsed` set every item is toggled once at load, so the document opens collapsed.
pub fn script(collapsed: bool) -> String {
    SCRIPT_TEMPLATE.replace("__COLLAPSE_ALL__", if collapsed { "true" } else { "false" })
}
