/*!
# Introductory Tutorial

Begin by opening a terminal and running `forth`. There is no banner and no
prompt; the interpreter simply waits for a line. Type CTRL-D to exit.

Forth works on a stack of numbers. Anything that looks like a whole number
is pushed on to the stack. Every other word takes its operands off the
stack and leaves its results there. Lines you type are marked with "`>`".

<pre><code>&nbsp;> 2 3
&nbsp;  ok
&nbsp;> .s
&nbsp;  &lt;2&gt; 2 3 ok
</code></pre>

The `.s` word shows the depth of the stack in angle brackets followed by
every value, bottom first. It does not change the stack. Now add the two
numbers and print the result with `.` which removes the value it prints.

<pre><code>&nbsp;> + .
&nbsp;  5 ok
&nbsp;> .s
&nbsp;  &lt;0&gt; ok
</code></pre>

Operators come after their operands. `10 4 -` is ten minus four. Longer
calculations never need parentheses.

<pre><code>&nbsp;> 1 2 + 3 4 + * .
&nbsp;  21 ok
</code></pre>

Division is exact. A result that is not a whole number is kept as a
fraction, so dividing and multiplying back gives exactly what you started
with.

<pre><code>&nbsp;> 1 3 / .s
&nbsp;  &lt;1&gt; 1/3 ok
&nbsp;> 3 * .
&nbsp;  1 ok
</code></pre>

When a word fails, the rest of the line is skipped and the error is shown
instead of `ok`. Work done earlier in the line is kept.

<pre><code>&nbsp;> 7 1 0 / 99 .
&nbsp;  Division by zero
&nbsp;> .s
&nbsp;  &lt;1&gt; 7 ok
</code></pre>

Type `words` to see everything the interpreter knows.

*/
